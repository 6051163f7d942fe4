// ABOUTME: Review cards: star rating, author, heading, body and date.
// ABOUTME: Ratings count filled marks; dates have "/" separators rewritten to ".".

use scraper::{ElementRef, Html};

use crate::options::Options;
use crate::query::{attr_or, find_all, find_one, select_text, select_text_with};
use crate::result::{Review, ReviewAuthor};

/// Rewrites `/` date separators to `.`.
pub fn process_date(date: &str) -> String {
    date.replace('/', ".")
}

/// Extracts every review card in document order.
pub fn extract_reviews(doc: &Html, opts: &Options) -> Vec<Review> {
    find_all(doc, ".reviews .items article")
        .into_iter()
        .map(|card| review_card(card, opts))
        .collect()
}

fn review_card(card: ElementRef<'_>, opts: &Options) -> Review {
    let rating = find_all(card, ".rating span.filled").len() as u32;

    Review {
        rating,
        author: ReviewAuthor {
            avatar: opts.resolve_url(&attr_or(find_one(card, ".author img"), "src", "")),
            name: select_text(card, ".author span", ""),
        },
        // First heading in document order, whatever its level.
        title: select_text(card, "h3, h4, h5, h6", ""),
        description: select_text(card, "p", ""),
        date: select_text_with(card, ".author i", "", |d| Ok(process_date(d))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const REVIEWS_HTML: &str = r#"
        <section class="reviews"><div class="items">
            <article>
                <div class="rating">
                    <span class="filled"></span><span class="filled"></span>
                    <span class="filled"></span><span></span><span></span>
                </div>
                <div class="author">
                    <img src="/avatars/jane.png">
                    <span>Jane</span>
                    <i>12/05/2024</i>
                </div>
                <h5>Comfortable</h5>
                <h3>Later heading</h3>
                <p>Wore them all week.</p>
            </article>
            <article>
                <div class="rating"><span></span></div>
                <div class="author"><span>Anon</span></div>
            </article>
        </div></section>
    "#;

    #[test]
    fn test_process_date() {
        assert_eq!(process_date("12/05/2024"), "12.05.2024");
        assert_eq!(process_date("2024-05-12"), "2024-05-12");
    }

    #[test]
    fn test_extract_reviews() {
        let doc = Html::parse_document(REVIEWS_HTML);
        let reviews = extract_reviews(&doc, &Options::default());
        assert_eq!(
            reviews,
            vec![
                Review {
                    rating: 3,
                    author: ReviewAuthor {
                        avatar: "/avatars/jane.png".to_string(),
                        name: "Jane".to_string(),
                    },
                    title: "Comfortable".to_string(),
                    description: "Wore them all week.".to_string(),
                    date: "12.05.2024".to_string(),
                },
                Review {
                    rating: 0,
                    author: ReviewAuthor {
                        avatar: String::new(),
                        name: "Anon".to_string(),
                    },
                    ..Default::default()
                },
            ]
        );
    }

    #[test]
    fn test_filled_marks_outside_rating_are_ignored() {
        let doc = Html::parse_document(
            r#"<div class="reviews"><div class="items"><article>
                <span class="filled"></span>
                <div class="rating"><span class="filled"></span></div>
            </article></div></div>"#,
        );
        let reviews = extract_reviews(&doc, &Options::default());
        assert_eq!(reviews[0].rating, 1);
    }
}
