use super::*;

#[test]
fn parse_price_accepts_blank_as_none() {
    assert_eq!(parse_price("   "), Ok(None));
}

#[test]
fn parse_price_accepts_dollar_prefix_and_decimals() {
    assert_eq!(parse_price(" $19.99 "), Ok(Some(19.99)));
    assert_eq!(parse_price("0"), Ok(Some(0.0)));
}

#[test]
fn parse_price_rejects_negative_and_garbage() {
    assert_eq!(parse_price("-1"), Err("Price must be a non-negative number."));
    assert_eq!(parse_price("cheap"), Err("Price must be a non-negative number."));
    assert_eq!(parse_price("inf"), Err("Price must be a non-negative number."));
}

#[test]
fn validate_product_input_builds_payload() {
    assert_eq!(
        validate_product_input(" Lamp ", " http://img ", "12.5"),
        Ok(ProductInput {
            name: "Lamp".to_owned(),
            image_url: Some("http://img".to_owned()),
            price: Some(12.5),
        })
    );
}

#[test]
fn validate_product_input_requires_name_first() {
    assert_eq!(validate_product_input("", "", "oops"), Err("Give the product a name."));
}

#[test]
fn product_form_values_prefill_edit_form() {
    let product = Product {
        id: "p1".to_owned(),
        name: "Lamp".to_owned(),
        image_url: None,
        price: Some(12.5),
        ..Product::default()
    };
    assert_eq!(
        product_form_values(&product),
        ("Lamp".to_owned(), String::new(), "12.5".to_owned())
    );
}

#[test]
fn parse_user_lookup_routes_by_at_sign() {
    assert_eq!(
        parse_user_lookup(" a@b.com "),
        Ok(UserQuery { email: Some("a@b.com".to_owned()), username: None })
    );
    assert_eq!(
        parse_user_lookup("ana"),
        Ok(UserQuery { email: None, username: Some("ana".to_owned()) })
    );
    assert_eq!(parse_user_lookup("  "), Err("Enter an email or username."));
}

#[test]
fn invite_for_uses_id_and_email_when_known() {
    let user = User { id: "u1".to_owned(), username: "ana".to_owned(), email: "a@b.com".to_owned() };
    assert_eq!(
        invite_for(&user),
        InviteInput {
            user_id: Some("u1".to_owned()),
            email: Some("a@b.com".to_owned()),
            username: None,
        }
    );
    let sparse = User { id: "u2".to_owned(), ..User::default() };
    assert_eq!(invite_for(&sparse).email, None);
}
