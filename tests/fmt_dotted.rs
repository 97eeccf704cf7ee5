//! Tests for the dotted line layout.

use dotlog::fmt::{FormatOptions, FormatPatch, dotted, format};
use dotlog::Origin;

fn options(patch: &FormatPatch) -> FormatOptions {
    FormatOptions::default().apply(patch)
}

fn width(s: &str) -> usize {
    s.chars().count()
}

#[test]
fn empty_message_uses_placeholder() {
    let line = format("", None, &options(&FormatPatch::new().dotted(true)));
    assert!(line.contains(" End "));
    assert_eq!(width(&line), 110);
    assert_eq!(line, format!("{} {}{}", "-".repeat(52), " End ", "-".repeat(52)));
}

#[test]
fn custom_placeholder() {
    let opts = options(&FormatPatch::new().total_width(11).empty_placeholder("Done"));
    assert_eq!(dotted("", "", &opts), "--  Done --");
}

#[test]
fn centers_message_in_fill() {
    let opts = options(&FormatPatch::new().total_width(20));
    assert_eq!(dotted("Hi", "", &opts), "-------- Hi --------");
}

#[test]
fn odd_remainder_goes_left() {
    let opts = options(&FormatPatch::new().total_width(21));
    assert_eq!(dotted("Hi", "", &opts), "--------  Hi --------");
}

#[test]
fn origin_label_takes_part_of_the_width() {
    let opts = options(&FormatPatch::new().dotted(true).total_width(20));
    let origin = Origin::from("app");
    let line = format("Hi", Some(&origin), &opts);
    assert_eq!(line, "------ Hi ------");
    assert_eq!(width(&origin.label()) + width(&line), 20);
}

#[test]
fn two_patterns_pad_the_remainder_with_spacers() {
    let opts = options(&FormatPatch::new().total_width(20).two_patterns("-->", "<--"));
    assert_eq!(dotted("Hi", "", &opts), "-->-->   Hi   <--<--");
}

#[test]
fn message_longer_than_width_gets_no_fill() {
    let opts = options(&FormatPatch::new().total_width(5));
    assert_eq!(dotted("Hello", "", &opts), " Hello ");
}

#[test]
fn empty_fill_pattern_pads_with_spacers_only() {
    let opts = options(&FormatPatch::new().total_width(10).fill_pattern(""));
    assert_eq!(dotted("x", "", &opts), "     x    ");
}

#[test]
fn widths_count_characters_not_bytes() {
    let opts = options(&FormatPatch::new().total_width(12).fill_pattern("─"));
    let line = dotted("ok", "", &opts);
    assert_eq!(line, "──── ok ────");
    assert_eq!(width(&line), 12);
}

#[test]
fn any_fill_pattern_hits_the_width_when_it_fits() {
    let messages = ["", "a", "Loading modules", "ÄÖÜ"];
    let labels = ["", "net:", "worker#12:"];
    let fills = ["-", "ab", "=-=", "─·"];
    for total in 0..60 {
        for fill in fills {
            let opts = options(&FormatPatch::new().total_width(total).fill_pattern(fill));
            for message in messages {
                for label in labels {
                    let shown = if message.is_empty() { "End" } else { message };
                    if total < width(label) + width(shown) + 2 {
                        continue;
                    }
                    let line = dotted(message, label, &opts);
                    assert_eq!(
                        width(label) + width(&line),
                        total,
                        "total={total} fill={fill:?} message={message:?} label={label:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn formatting_is_deterministic() {
    let opts = options(&FormatPatch::new().dotted(true).two_patterns("=>", "<="));
    let origin = Origin::named("worker", 3);
    let first = format("same input", Some(&origin), &opts);
    let second = format("same input", Some(&origin), &opts);
    assert_eq!(first, second);
}

#[test]
fn not_dotted_returns_message_unchanged() {
    let opts = FormatOptions::default();
    assert_eq!(format("plain", None, &opts), "plain");
    assert_eq!(format("", None, &opts), "");
}

#[test]
fn patches_merge_with_later_values_winning() {
    let base = FormatPatch::new().total_width(40).fill_pattern("=");
    let call = FormatPatch::new().total_width(20);
    let merged = base.merge(&call);
    assert_eq!(merged.total_width, Some(20));
    assert_eq!(merged.fill_pattern.as_deref(), Some("="));
    assert!(FormatPatch::new().is_empty());
    assert!(!merged.is_empty());
}
