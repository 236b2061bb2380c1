use maud::{html, Markup};

use super::{base_layout, review_card, text_field};
use crate::db::{entities::artist, repositories::{ArtistOption, ReviewListing}};

pub fn review_form_page() -> Markup {
    base_layout(
        "Add a review",
        html! {
            div class="max-w-3xl mx-auto" {
                h1 class="text-3xl font-bold text-gray-900 mb-8" { "Add a review" }

                form method="post" action="/addreview" class="space-y-6" {
                    fieldset class="bg-white rounded-lg shadow-sm p-6 space-y-4" {
                        legend class="text-xl font-semibold" { "Artist" }
                        (text_field("Name", "artist_name", "text", true))
                        (text_field("Description", "artist_description", "text", false))
                        (text_field("Picture URL", "artist_picture", "url", false))
                    }

                    fieldset class="bg-white rounded-lg shadow-sm p-6 space-y-4" {
                        legend class="text-xl font-semibold" { "Album & track" }
                        (text_field("Album title", "album_title", "text", true))
                        (text_field("Track title", "track_title", "text", true))
                        (text_field("Track length", "track_length", "text", false))
                        (text_field("Track artwork URL", "track_artwork", "url", false))
                    }

                    fieldset class="bg-white rounded-lg shadow-sm p-6 space-y-4" {
                        legend class="text-xl font-semibold" { "Your review" }
                        (text_field("Your name", "reviewer_name", "text", true))
                        (text_field("Title", "review_title", "text", false))
                        div {
                            label for="review_description" class="block text-sm font-medium text-gray-700 mb-2" {
                                "Review"
                            }
                            textarea id="review_description" name="review_description" rows="5"
                                class="w-full px-3 py-2 border border-gray-300 rounded-md" {}
                        }
                        div {
                            label for="star_rating" class="block text-sm font-medium text-gray-700 mb-2" {
                                "Rating"
                            }
                            select id="star_rating" name="star_rating" class="px-3 py-2 border border-gray-300 rounded-md" {
                                option value="" { "No rating" }
                                @for n in (1..=5).rev() {
                                    option value=(n) { (n) " stars" }
                                }
                            }
                        }
                    }

                    button type="submit" class="px-4 py-2 bg-primary text-white font-semibold rounded-md" {
                        "Submit review"
                    }
                }
            }
        },
    )
}

pub fn artist_index_page(artists: &[ArtistOption]) -> Markup {
    base_layout(
        "Artists",
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-8" { "Browse reviews" }

            @if artists.is_empty() {
                p class="text-gray-600" {
                    "No reviews yet. "
                    a href="/musicreview" class="text-primary hover:underline" { "Write the first one." }
                }
            } @else {
                ul class="space-y-2" {
                    @for entry in artists {
                        li {
                            a href=(format!("/artists/{}/reviews", entry.artist_id)) class="text-primary hover:underline" {
                                (entry.artist_name)
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn artist_reviews_page(artist: &artist::Model, reviews: &[ReviewListing]) -> Markup {
    base_layout(
        &artist.name,
        html! {
            header class="flex items-center space-x-6 mb-8" {
                @if let Some(picture) = &artist.picture_url {
                    img src=(picture) alt=(artist.name) class="w-24 h-24 rounded-full object-cover";
                }
                div {
                    h1 class="text-3xl font-bold text-gray-900" { (artist.name) }
                    @if let Some(description) = &artist.description {
                        p class="text-gray-600 mt-2" { (description) }
                    }
                }
            }

            @if reviews.is_empty() {
                p class="text-gray-600" { "No reviews for this artist yet." }
            } @else {
                @for review in reviews {
                    (review_card(review))
                }
            }
        },
    )
}
