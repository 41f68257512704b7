pub mod ad;
pub mod event;
pub mod image;
pub mod record;

pub use ad::{AdFields, AdInput, BackendAdFields, NewAd};
pub use event::{BackendEventFields, EventFields, EventInput, NewEvent};
pub use image::{ImageAttachment, ImageHostResponse, UploadedImage, VotingOptionImage};
pub use record::RecordPayload;
