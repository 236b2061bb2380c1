pub mod dimensions;
pub mod review_ingest;

pub use dimensions::{
    insert_review, resolve_album, resolve_artist, resolve_reviewer, resolve_track, NewReview,
    Resolved,
};
pub use review_ingest::{ingest_review, ingest_within, IngestOutcome, IngestStage, ReviewSubmission};
