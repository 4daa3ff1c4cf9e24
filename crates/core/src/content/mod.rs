//! Static lesson content and the topic registry.

mod doctrine;
mod first_aid;
mod knots;
mod lesson;
pub mod topics;
mod trail;

pub use doctrine::{DOCTRINE_SECTIONS, DoctrineSection};
pub use first_aid::{FIRST_AID_PROCEDURES, Procedure};
pub use knots::{KNOTS, Knot};
pub use lesson::Lesson;
pub use trail::{TRAIL_SIGNS, TrailSign};
