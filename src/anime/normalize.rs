use serde::Serialize;

use crate::anime::color::{FALLBACK_BACKGROUND, contrasting_text_color};
use crate::anime::schema::Media;

/// A normalized anime entry, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub id: i64,
    pub title: String,
    pub cover_url: String,
    pub background_color: String,
    pub text_color: String,
}

impl From<Media> for DisplayRecord {
    fn from(media: Media) -> Self {
        let background_color = media
            .cover_image
            .color
            .unwrap_or_else(|| FALLBACK_BACKGROUND.to_string());
        let text_color = contrasting_text_color(&background_color).to_string();

        Self {
            id: media.id,
            title: media.title.romaji,
            cover_url: media.cover_image.extra_large,
            background_color,
            text_color,
        }
    }
}

pub fn normalize(media: Vec<Media>) -> Vec<DisplayRecord> {
    media.into_iter().map(DisplayRecord::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anime::color::{DARK_TEXT, LIGHT_TEXT};
    use crate::anime::schema::{CoverImage, MediaTitle};

    fn media(color: Option<&str>) -> Media {
        Media {
            id: 154587,
            title: MediaTitle {
                romaji: "Sousou no Frieren".into(),
            },
            media_type: "ANIME".into(),
            cover_image: CoverImage {
                extra_large: "https://s4.anilist.co/xl.jpg".into(),
                large: "https://s4.anilist.co/l.jpg".into(),
                medium: "https://s4.anilist.co/m.jpg".into(),
                color: color.map(str::to_string),
            },
        }
    }

    #[test]
    fn uses_highest_resolution_cover() {
        let record = DisplayRecord::from(media(Some("#e4a15d")));
        assert_eq!(record.id, 154587);
        assert_eq!(record.title, "Sousou no Frieren");
        assert_eq!(record.cover_url, "https://s4.anilist.co/xl.jpg");
        assert_eq!(record.background_color, "#e4a15d");
    }

    #[test]
    fn null_color_falls_back_to_black() {
        let record = DisplayRecord::from(media(None));
        assert_eq!(record.background_color, "black");
        assert_eq!(record.text_color, LIGHT_TEXT);
    }

    #[test]
    fn white_cover_gets_dark_caption() {
        let record = DisplayRecord::from(media(Some("#ffffff")));
        assert_eq!(record.text_color, DARK_TEXT);
    }
}
