mod content;
pub use content::*;

mod picture;
pub use picture::Picture;
pub use picture::PictureType;

mod tag;
pub use tag::*;

mod options;
pub use options::ReadOptions;
