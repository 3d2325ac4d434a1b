//! Report document and its page layout.
//!
//! Layout is format-independent: writers only draw the lines they are given.

/// Title printed at the top of every report.
pub const REPORT_TITLE: &str = "ShopGPT AI Summary";

/// Usable body line width in 1/1000 em of the body font.
///
/// A4 is 210 mm wide; 10 mm margins leave 190 mm (538.6 pt), which is about
/// 44 880 units at 12 pt. Rounded down to keep clear of the right margin.
pub const BODY_LINE_UNITS: u32 = 44_000;

/// Lines (including spacers) that fit on one page.
pub const LINES_PER_PAGE: usize = 38;

/// Category, price range and summary to be exported. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub category: String,
    pub min_price: f64,
    pub max_price: f64,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Body,
    Spacer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    pub style: LineStyle,
    pub text: String,
}

impl LayoutLine {
    fn title(text: impl Into<String>) -> Self {
        Self {
            style: LineStyle::Title,
            text: text.into(),
        }
    }

    fn body(text: impl Into<String>) -> Self {
        Self {
            style: LineStyle::Body,
            text: text.into(),
        }
    }

    fn spacer() -> Self {
        Self {
            style: LineStyle::Spacer,
            text: String::new(),
        }
    }
}

/// Paginated lines of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub pages: Vec<Vec<LayoutLine>>,
}

impl ReportLayout {
    /// All lines across pages, in order.
    pub fn lines(&self) -> impl Iterator<Item = &LayoutLine> {
        self.pages.iter().flatten()
    }
}

impl ReportDocument {
    pub fn new(
        category: impl Into<String>,
        min_price: f64,
        max_price: f64,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            min_price,
            max_price,
            summary: summary.into(),
        }
    }

    /// `"<min> - <max>"`, integers printed without a decimal point.
    pub fn price_range(&self) -> String {
        format!("{} - {}", self.min_price, self.max_price)
    }

    /// Lay the document out into pages: title, category, price range, wrapped summary.
    pub fn layout(&self) -> ReportLayout {
        let body = |text: &str| {
            wrap_text_with(text, BODY_LINE_UNITS, helvetica_width)
                .into_iter()
                .map(LayoutLine::body)
        };

        let mut lines = vec![LayoutLine::title(REPORT_TITLE), LayoutLine::spacer()];
        lines.extend(body(&format!("Category: {}", self.category)));
        lines.extend(body(&format!("Price Range: {}", self.price_range())));
        lines.push(LayoutLine::spacer());
        lines.extend(body(&self.summary));

        let pages = lines
            .chunks(LINES_PER_PAGE)
            .map(|chunk| chunk.to_vec())
            .collect();
        ReportLayout { pages }
    }
}

/// Word-wrap `text` so that no line measures more than `max_width`.
///
/// `measure` gives the advance width of one character. A word that does not fit
/// on a line of its own is split; every piece holds at least one character.
pub fn wrap_text_with(text: &str, max_width: u32, measure: impl Fn(char) -> u32) -> Vec<String> {
    let space = measure(' ');
    let mut out = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0u32;

        for word in paragraph.split_whitespace() {
            let mut rest = word;
            let mut word_width = measured(rest, &measure);

            while word_width > max_width {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                let (head, tail) = split_to_fit(rest, max_width, &measure);
                out.push(head.to_string());
                rest = tail;
                word_width = measured(rest, &measure);
            }
            if rest.is_empty() {
                continue;
            }

            if !current.is_empty() && current_width + space + word_width > max_width {
                out.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += space;
            }
            current.push_str(rest);
            current_width += word_width;
        }

        out.push(current);
    }

    out
}

fn measured(text: &str, measure: &impl Fn(char) -> u32) -> u32 {
    text.chars().map(measure).sum()
}

/// Longest prefix of `word` that fits in `max_width`, never empty.
fn split_to_fit<'a>(
    word: &'a str,
    max_width: u32,
    measure: &impl Fn(char) -> u32,
) -> (&'a str, &'a str) {
    let mut width = 0;
    let mut end = 0;
    for (i, c) in word.char_indices() {
        let w = measure(c);
        if end > 0 && width + w > max_width {
            break;
        }
        width += w;
        end = i + c.len_utf8();
    }
    word.split_at(end)
}

/// Helvetica advance width of `c` in 1/1000 em.
///
/// Characters outside printable ASCII are measured as a full em.
pub fn helvetica_width(c: char) -> u32 {
    match c {
        ' ' | '!' | ',' | '.' | '/' | ':' | ';' | '[' | '\\' | ']' | 'I' | 'f' | 't' => 278,
        '"' => 355,
        '#' | '$' | '0'..='9' | '?' | '_' => 556,
        '%' => 889,
        '&' | 'A' | 'B' | 'E' | 'K' | 'P' | 'S' | 'V' | 'X' | 'Y' => 667,
        '\'' => 191,
        '(' | ')' | '-' | '`' | 'r' => 333,
        '*' => 389,
        '+' | '<' | '=' | '>' | '~' => 584,
        '@' => 1015,
        'C' | 'D' | 'H' | 'N' | 'R' | 'U' | 'w' => 722,
        'F' | 'T' | 'Z' => 611,
        'G' | 'O' | 'Q' => 778,
        'J' | 'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' => 500,
        'L' | 'a' | 'b' | 'd' | 'e' | 'g' | 'h' | 'n' | 'o' | 'p' | 'q' | 'u' => 556,
        'M' | 'm' => 833,
        'W' => 944,
        '^' => 469,
        'i' | 'j' | 'l' => 222,
        '{' | '}' => 334,
        '|' => 260,
        _ => 1000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_char(_: char) -> u32 {
        1
    }

    #[test]
    fn test_price_range_format() {
        let doc = ReportDocument::new("Shoes", 0.0, 100.0, "");
        assert_eq!(doc.price_range(), "0 - 100");
        let doc = ReportDocument::new("Shoes", 9.5, 20.25, "");
        assert_eq!(doc.price_range(), "9.5 - 20.25");
    }

    #[test]
    fn test_layout_order() {
        let doc = ReportDocument::new("Shoes", 0.0, 100.0, "Pros: good\nCons: none\nVerdict: buy");
        let layout = doc.layout();
        let texts: Vec<&str> = layout.lines().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                REPORT_TITLE,
                "",
                "Category: Shoes",
                "Price Range: 0 - 100",
                "",
                "Pros: good",
                "Cons: none",
                "Verdict: buy",
            ]
        );
    }

    #[test]
    fn test_layout_paginates_long_summary() {
        let summary = vec!["line"; LINES_PER_PAGE * 2].join("\n");
        let layout = ReportDocument::new("Boots", 0.0, 1.0, summary).layout();
        assert_eq!(layout.pages.len(), 3);
        assert!(layout.pages.iter().all(|p| p.len() <= LINES_PER_PAGE));
        assert_eq!(layout.pages[0][0].style, LineStyle::Title);
        assert_eq!(layout.lines().count(), 5 + LINES_PER_PAGE * 2);
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let wrapped = wrap_text_with("the quick brown fox jumps", 10, per_char);
        assert_eq!(wrapped, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_text_keeps_blank_lines() {
        let wrapped = wrap_text_with("a\n\nb", 10, per_char);
        assert_eq!(wrapped, vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_text_splits_long_word() {
        let wrapped = wrap_text_with("ab abcdefghij", 4, per_char);
        assert_eq!(wrapped, vec!["ab", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_counts_chars_not_bytes() {
        let wrapped = wrap_text_with("ééé ééé", 7, per_char);
        assert_eq!(wrapped, vec!["ééé ééé"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text_with("", 10, per_char).is_empty());
    }

    #[test]
    fn test_wide_glyphs_wrap_within_page_width() {
        let summary = "W".repeat(90);
        let layout = ReportDocument::new("Shoes", 0.0, 100.0, summary).layout();
        let body: Vec<&str> = layout.lines().skip(5).map(|l| l.text.as_str()).collect();

        assert!(body.len() > 1);
        assert_eq!(body.concat(), "W".repeat(90));
        for line in body {
            assert!(measured(line, &helvetica_width) <= BODY_LINE_UNITS);
        }
    }

    #[test]
    fn test_wide_words_wrap_before_margin() {
        let summary = vec!["WWWWW"; 20].join(" ");
        let wrapped = wrap_text_with(&summary, BODY_LINE_UNITS, helvetica_width);

        assert!(wrapped.len() > 1);
        assert!(wrapped.iter().all(|l| measured(l, &helvetica_width) <= BODY_LINE_UNITS));
        assert!(wrapped.iter().all(|l| l.split(' ').all(|w| w == "WWWWW")));
    }

    #[test]
    fn test_plain_sentence_fits_one_line() {
        let sentence = "Pros: comfortable fit, light sole and good grip on wet roads.";
        let wrapped = wrap_text_with(sentence, BODY_LINE_UNITS, helvetica_width);
        assert_eq!(wrapped, vec![sentence]);
    }

    #[test]
    fn test_long_category_is_wrapped() {
        let category = "Mmmm ".repeat(30);
        let layout = ReportDocument::new(category.trim(), 0.0, 1.0, "s").layout();
        let lines: Vec<&LayoutLine> = layout.lines().collect();

        assert!(lines[2].text.starts_with("Category: "));
        assert_eq!(lines[3].style, LineStyle::Body);
        assert!(!lines[3].text.starts_with("Price Range"));
        assert!(lines
            .iter()
            .all(|l| measured(&l.text, &helvetica_width) <= BODY_LINE_UNITS));
    }
}
