use eroc_regex::{
    AstNode,
    charset::{CharClass, CharSet, Error},
};

fn members(set: &CharSet) -> Vec<u8> {
    set.iter().collect()
}

#[test]
fn test_add_and_contains_charset() {
    let mut set = CharSet::new();
    assert!(set.is_empty());

    set.add_byte(b'a');
    set.add_byte(0);
    set.add_byte(255);
    set.add_byte(b'a');

    assert_eq!(set.len(), 3);
    assert!(set.contains(b'a'));
    assert!(set.contains(0));
    assert!(set.contains(255));
    assert!(!set.contains(b'b'));
    assert_eq!(members(&set), vec![0, b'a', 255]);
}

#[test]
fn test_range_charset() {
    let mut set = CharSet::new();
    set.add_range(b'0', b'9').unwrap();
    assert_eq!(members(&set), b"0123456789".to_vec());

    let mut set = CharSet::new();
    set.add_range(b'x', b'x').unwrap();
    assert_eq!(members(&set), vec![b'x']);

    let mut set = CharSet::new();
    set.add_range(0, 255).unwrap();
    assert_eq!(set.len(), 256);
}

#[test]
fn test_reversed_range_charset() {
    let mut set = CharSet::new();
    assert_eq!(set.add_range(b'9', b'0'), Err(Error::Range(b'9', b'0')));
    assert!(set.is_empty());
}

#[test]
fn test_shorthand_charset() {
    assert_eq!(
        members(&CharSet::shorthand(b'd').unwrap()),
        b"0123456789".to_vec()
    );
    assert_eq!(
        members(&CharSet::shorthand(b'w').unwrap()),
        b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz".to_vec()
    );
    assert_eq!(
        members(&CharSet::shorthand(b's').unwrap()),
        vec![b'\t', b'\n', 0x0b, 0x0c, b'\r', b' ']
    );
    assert_eq!(
        members(&CharSet::shorthand(b'a').unwrap()),
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz".to_vec()
    );
    assert_eq!(CharSet::shorthand(b'x'), Err(Error::Shorthand(b'x')));
}

#[test]
fn test_add_negated_shorthand_charset() {
    let mut set = CharSet::new();
    set.add_shorthand(b'D').unwrap();
    assert_eq!(set.len(), 246);
    assert!(!set.contains(b'5'));
    assert!(set.contains(b'a'));
    assert!(set.contains(0));
    assert!(set.contains(255));
}

#[test]
fn test_class_inverse_flag() {
    let mut class = CharClass::new(CharSet::new());
    class.add_member(b'q');
    assert!(class.is_member(b'q'));
    assert!(class.matches(b'q'));
    assert!(!class.matches(b'r'));

    class.invert();
    assert!(class.inverse());
    assert!(class.is_member(b'q'));
    assert!(!class.matches(b'q'));
    assert!(class.matches(b'r'));

    let upper = CharClass::shorthand(b'S').unwrap();
    assert!(upper.inverse());
    assert!(upper.is_member(b' '));
}

#[test]
fn test_node_class_operations() {
    let mut node = AstNode::char_class(CharSet::new());
    assert!(node.add_member(b'z'));
    assert!(node.is_member(b'z'));
    assert!(!node.is_member(b'y'));
    assert!(node.invert());
    assert!(node.as_char_class().unwrap().inverse());
    assert!(node.is_member(b'z'));

    let mut literal = AstNode::literal(b'z');
    assert!(!literal.add_member(b'z'));
    assert!(!literal.is_member(b'z'));
    assert!(!literal.invert());
    assert_eq!(literal, AstNode::literal(b'z'));
}
