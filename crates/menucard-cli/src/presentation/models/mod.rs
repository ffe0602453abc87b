pub mod notice;

pub use notice::Notice;
