use super::*;
use crate::request::PostType;

fn social() -> CleaningPipeline {
    CleaningPipeline::for_post_type(PostType::SocialMedia)
}

fn statistic() -> CleaningPipeline {
    CleaningPipeline::for_post_type(PostType::Statistic)
}

// ========================================================================
// Individual rules
// ========================================================================

#[test]
fn test_list_marker_ordinals() {
    let rule = StripListMarker;
    assert_eq!(rule.apply("1. Coffee"), "Coffee");
    assert_eq!(rule.apply("12) Coffee"), "Coffee");
    assert_eq!(rule.apply("3.5 billion cups"), "3.5 billion cups");
    assert_eq!(rule.apply("30% of adults"), "30% of adults");
    assert_eq!(rule.apply("1.Coffee"), "Coffee");
    assert_eq!(rule.apply("2)Coffee"), "Coffee");
}

#[test]
fn test_list_marker_keeps_signed_numbers() {
    let rule = StripListMarker;
    assert_eq!(rule.apply("-5% drop in sales"), "-5% drop in sales");
    assert_eq!(rule.apply("~30% of adults"), "~30% of adults");
    assert_eq!(rule.apply(">10 cups a day"), ">10 cups a day");
    assert_eq!(rule.apply("- -5% drop"), "-5% drop");
    assert_eq!(rule.apply("-Coffee"), "Coffee");
    assert_eq!(rule.apply("* 5 cups"), "5 cups");
}

#[test]
fn test_list_marker_bullets() {
    let rule = StripListMarker;
    assert_eq!(rule.apply("- Coffee"), "Coffee");
    assert_eq!(rule.apply("• Coffee"), "Coffee");
    assert_eq!(rule.apply("* 1. Coffee"), "Coffee");
    assert_eq!(rule.apply("Mid-morning coffee"), "Mid-morning coffee");
}

#[test]
fn test_hashtags_removed_only_at_token_start() {
    let rule = StripHashtags;
    let out = rule.apply("Brew better #coffee #morningVibes");
    assert!(!out.contains('#'));
    assert!(out.starts_with("Brew better"));

    // A fragment inside a URL is not a hashtag
    let url = "See https://example.com/page#section";
    assert_eq!(rule.apply(url), url);
}

#[test]
fn test_quotes_removed() {
    let rule = StripQuotes;
    assert_eq!(rule.apply("\"75%\" of \u{201C}people\u{201D}"), "75% of people");
}

#[test]
fn test_collapse_whitespace() {
    let rule = CollapseWhitespace;
    assert_eq!(rule.apply("  a   b\t c  "), "a b c");
}

// ========================================================================
// Pipeline
// ========================================================================

#[test]
fn test_pipeline_rule_order() {
    assert_eq!(
        social().rule_names(),
        vec!["trim", "hashtags", "list-marker", "collapse-whitespace"]
    );
    assert_eq!(
        statistic().rule_names(),
        vec!["trim", "hashtags", "quotes", "list-marker", "collapse-whitespace"]
    );
}

#[test]
fn test_social_example_line() {
    let cleaned = social().clean("1. Great coffee brightens mornings. #coffee");
    assert_eq!(cleaned, "Great coffee brightens mornings.");
}

#[test]
fn test_ordinal_without_space() {
    let cleaned = social().clean("1.Great coffee brightens mornings.");
    assert_eq!(cleaned, "Great coffee brightens mornings.");
}

#[test]
fn test_statistic_keeps_negative_and_approximate_numbers() {
    let cleaned = statistic().clean("-5% drop in coffee sales; https://x.io");
    assert_eq!(cleaned, "-5% drop in coffee sales; https://x.io");

    let cleaned = statistic().clean("3. ~30% of adults skip breakfast");
    assert_eq!(cleaned, "~30% of adults skip breakfast");
}

#[test]
fn test_social_keeps_quotes() {
    let cleaned = social().clean("- \"Espresso yourself\" every day");
    assert_eq!(cleaned, "\"Espresso yourself\" every day");
}

#[test]
fn test_statistic_strips_quotes_keeps_link() {
    let cleaned =
        statistic().clean("2. \"Coffee\" is drunk by 64% of adults; https://example.com/a#b");
    assert_eq!(
        cleaned,
        "Coffee is drunk by 64% of adults; https://example.com/a#b"
    );
}

#[test]
fn test_marker_hidden_behind_hashtag() {
    // Hashtag removal exposes a bullet that must also go
    let cleaned = social().clean("#tag - #other Fresh beans");
    assert_eq!(cleaned, "Fresh beans");
}

#[test]
fn test_garbage_lines_become_empty() {
    assert_eq!(social().clean("   "), "");
    assert_eq!(social().clean("1."), "");
    assert_eq!(social().clean("- #coffee"), "");
}

#[test]
fn test_cleaning_is_idempotent() {
    let samples = [
        "1. Great coffee brightens mornings. #coffee",
        "  -  - 2) \"Quoted\"   words  #a#b ",
        "#x 3. #y - text",
        "• “Curly” quotes; https://example.com",
        "1.-5% #☀️ drop",
        "~ ~30%",
        "Plain line",
        "",
    ];

    for pipeline in [social(), statistic()] {
        for sample in samples {
            let once = pipeline.clean(sample);
            let twice = pipeline.clean(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", sample);
        }
    }
}

#[test]
fn test_statistic_output_has_no_double_quotes() {
    let body = "1. \"42%\" of fires start in kitchens\n2. “Smoke alarms” halve deaths\n";
    for line in statistic().clean_response(body) {
        assert!(!line.contains('"'));
        assert!(!line.contains('\u{201C}'));
    }
}

#[test]
fn test_social_output_has_no_hashtag_tokens() {
    let body = "Sip slowly #coffee #latte\n#brew Beans matter\nDark roast ##bold\n\
                Sunny mornings ahead #\u{2600}\u{FE0F}\nWake up #! now\nLone # sign";
    for line in social().clean_response(body) {
        assert!(
            line.split_whitespace().all(|token| !token.starts_with('#')),
            "hashtag survived in {:?}",
            line
        );
    }
}

#[test]
fn test_clean_response_drops_empty_lines() {
    let body = "1. First post\n\n   \n2. Second post\r\n- #onlytag\n3. Third post";
    let lines = social().clean_response(body);
    assert_eq!(lines, vec!["First post", "Second post", "Third post"]);
}

#[test]
fn test_custom_pipeline() {
    let mut pipeline = CleaningPipeline::new();
    pipeline.push(StripQuotes);
    assert_eq!(pipeline.clean("\"a\""), "a");
    assert_eq!(pipeline.rule_names(), vec!["quotes"]);
}
