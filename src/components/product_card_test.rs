use super::*;

#[test]
fn format_price_uses_two_decimals() {
    assert_eq!(format_price(Some(19.5)), Some("$19.50".to_owned()));
    assert_eq!(format_price(Some(0.0)), Some("$0.00".to_owned()));
}

#[test]
fn format_price_hides_missing_or_invalid_values() {
    assert_eq!(format_price(None), None);
    assert_eq!(format_price(Some(f64::NAN)), None);
}

#[test]
fn validate_comment_trims_text() {
    assert_eq!(validate_comment("  love it "), Ok(CommentInput { text: "love it".to_owned() }));
}

#[test]
fn validate_comment_rejects_blank() {
    assert_eq!(validate_comment("   "), Err("Write a comment first."));
}

#[test]
fn reaction_palette_has_no_duplicates() {
    let mut seen = REACTION_EMOJIS.to_vec();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), REACTION_EMOJIS.len());
}
