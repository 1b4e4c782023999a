//! Configuration section definitions.
//!
//! Each module corresponds to a section in `obsimg.toml`:
//!
//! | Module    | TOML Section | Purpose                                  |
//! |-----------|--------------|------------------------------------------|
//! | `paths`   | `[paths]`    | Posts, attachments, static image dirs    |
//! | `rewrite` | `[rewrite]`  | Link style and alt text                  |
//! | `site`    | `[site]`     | Base URL and image URL segment           |

mod paths;
mod rewrite;
mod site;

pub use paths::PathsConfig;
pub use rewrite::{LinkStyle, RewriteConfig};
pub use site::SiteSectionConfig;
