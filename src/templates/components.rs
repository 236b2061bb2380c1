use maud::{html, Markup};

use crate::db::repositories::ReviewListing;

pub fn text_field(label: &str, name: &str, input_type: &str, required: bool) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            input
                type=(input_type)
                id=(name)
                name=(name)
                required[required]
                class="w-full px-3 py-2 border border-gray-300 rounded-md";
        }
    }
}

/// Filled and empty stars for a 0-5 rating; out-of-range values are clamped
/// for display only.
pub fn stars(rating: Option<i32>) -> Markup {
    match rating {
        Some(r) => {
            let filled = r.clamp(0, 5) as usize;
            html! {
                span class="text-yellow-500" title=(format!("{} / 5", r)) {
                    ("★".repeat(filled)) ("☆".repeat(5 - filled))
                }
            }
        }
        None => html! { span class="text-gray-400" { "Not rated" } },
    }
}

pub fn review_card(review: &ReviewListing) -> Markup {
    html! {
        article class="review-card bg-white rounded-lg shadow-sm p-6" {
            div class="flex items-start space-x-4" {
                @if let Some(artwork) = &review.track_artwork {
                    img src=(artwork) alt={(format!("{} artwork", review.track_title))} class="w-16 h-16 rounded";
                }
                div {
                    h3 class="text-lg font-semibold" {
                        (review.review_title.as_deref().unwrap_or("Untitled review"))
                    }
                    p class="text-sm text-gray-600" {
                        (review.track_title)
                        @if let Some(length) = &review.track_length {
                            " (" (length) ")"
                        }
                        " · reviewed by " (review.reviewer_name)
                    }
                    (stars(review.star_rating))
                }
            }
            @if let Some(body) = &review.review_description {
                p class="mt-4 text-gray-800" { (body) }
            }
            p class="mt-2 text-xs text-gray-500" {
                (review.created_at.format("%Y-%m-%d %H:%M").to_string())
            }
        }
    }
}
