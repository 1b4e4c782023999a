//! Name forms of a referenced image.

use crate::config::LinkStyle;

/// The three independent spellings of one referenced image.
///
/// | Style      | `original`     | `link`           | `dest`         |
/// |------------|----------------|------------------|----------------|
/// | `extended` | `My Photo.png` | `My_Photo.png`   | `My_Photo.png` |
/// | `simple`   | `My Photo.png` | `My%20Photo.png` | `My Photo.png` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForms<'a> {
    /// Name as written inside the embed; used to find the source file.
    pub original: &'a str,
    /// Name placed in the generated link URL.
    pub link: String,
    /// Name of the copy in the static image directory.
    pub dest: String,
}

impl<'a> NameForms<'a> {
    pub fn new(original: &'a str, style: LinkStyle) -> Self {
        match style {
            LinkStyle::Extended => {
                let normalized = original.replace(' ', "_");
                Self {
                    original,
                    link: normalized.clone(),
                    dest: normalized,
                }
            }
            LinkStyle::Simple => Self {
                original,
                link: original.replace(' ', "%20"),
                dest: original.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_forms() {
        let forms = NameForms::new("My Photo.png", LinkStyle::Extended);
        assert_eq!(forms.original, "My Photo.png");
        assert_eq!(forms.link, "My_Photo.png");
        assert_eq!(forms.dest, "My_Photo.png");
    }

    #[test]
    fn test_simple_forms() {
        let forms = NameForms::new("My Photo.png", LinkStyle::Simple);
        assert_eq!(forms.original, "My Photo.png");
        assert_eq!(forms.link, "My%20Photo.png");
        assert_eq!(forms.dest, "My Photo.png");
    }

    #[test]
    fn test_every_space_replaced() {
        let forms = NameForms::new("a  b c.png", LinkStyle::Extended);
        assert_eq!(forms.link, "a__b_c.png");

        let forms = NameForms::new("a  b c.png", LinkStyle::Simple);
        assert_eq!(forms.link, "a%20%20b%20c.png");
    }

    #[test]
    fn test_no_spaces_all_forms_equal() {
        for style in [LinkStyle::Extended, LinkStyle::Simple] {
            let forms = NameForms::new("shot.png", style);
            assert_eq!(forms.link, "shot.png");
            assert_eq!(forms.dest, "shot.png");
        }
    }

    #[test]
    fn test_only_spaces_touched() {
        // tabs, percent signs and underscores are left as they are
        let forms = NameForms::new("50%_done\tx.png", LinkStyle::Simple);
        assert_eq!(forms.link, "50%_done\tx.png");
    }
}
