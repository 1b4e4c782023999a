//! Obsidian image embeds.
//!
//! ```text
//! ![[My Photo.png]]
//!    └──────────┘ original name (as stored in the attachments folder)
//!
//! extended  ->  ![Image Description](https://site/blog/images/My_Photo.png)   copy: My_Photo.png
//! simple    ->  ![Image Description](/images/My%20Photo.png)                   copy: My Photo.png
//! ```
//!
//! | Module    | Purpose                                           |
//! |-----------|---------------------------------------------------|
//! | `scan`    | Find `![[name.ext]]` embeds in document text      |
//! | `name`    | Original / link / destination name forms          |
//! | `rewrite` | Build the Markdown link and apply it to the text  |

mod name;
mod rewrite;
mod scan;

pub use name::NameForms;
pub use rewrite::{LinkTarget, replace_all};
pub use scan::scan_embeds;
