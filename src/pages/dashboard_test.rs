use super::*;

#[test]
fn validate_wishlist_input_requires_name() {
    assert_eq!(validate_wishlist_input("  ", "desc"), Err("Give the wishlist a name."));
}

#[test]
fn validate_wishlist_input_drops_blank_description() {
    assert_eq!(
        validate_wishlist_input(" Birthday ", "  "),
        Ok(WishlistInput { name: "Birthday".to_owned(), description: None })
    );
    assert_eq!(
        validate_wishlist_input("Trip", " gear "),
        Ok(WishlistInput { name: "Trip".to_owned(), description: Some("gear".to_owned()) })
    );
}

#[test]
fn invite_label_prefers_populated_name() {
    let populated = WishlistRef::Wishlist(Box::new(Wishlist {
        id: "w1".to_owned(),
        name: "Trip".to_owned(),
        ..Wishlist::default()
    }));
    assert_eq!(invite_label(&populated), "Trip");
    assert_eq!(invite_label(&WishlistRef::Id("w2".to_owned())), "Wishlist w2");
}

#[test]
fn unread_count_ignores_read_notifications() {
    let notifications = vec![
        Notification { read: true, ..Notification::default() },
        Notification { read: false, ..Notification::default() },
        Notification::default(),
    ];
    assert_eq!(unread_count(&notifications), 2);
}
