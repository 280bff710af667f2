//! Section styles: draft patches and the decoded background.

use crate::entities::section_style::{ActiveModel, Model as SectionStyleModel};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Patch;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleQuery {
    /// `true` only returns the row once it has been published.
    #[serde(default)]
    pub published: bool,
}

/// Partial style update.
///
/// An absent field is left untouched, an explicit `null` clears it.
/// `section_key` and `is_published` are not part of the patch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SectionStylePatch {
    #[validate(length(min = 1, max = 128))]
    pub section_name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub background_color: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub background_gradient: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub background_image: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub background_overlay: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub text_color: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub heading_color: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub subheading_color: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub font_family: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub font_size: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub card_background: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub card_border: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub card_radius: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub card_shadow: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub card_text_color: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub button_background: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub button_text: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub button_hover: Option<Option<String>>,
}

impl Patch<ActiveModel> for SectionStylePatch {
    fn apply(self, model: &mut ActiveModel) {
        let patch = self;
        apply_patch!(patch => model {
            section_name,
            background_color,
            background_gradient,
            background_image,
            background_overlay,
            text_color,
            heading_color,
            subheading_color,
            font_family,
            font_size,
            card_background,
            card_border,
            card_radius,
            card_shadow,
            card_text_color,
            button_background,
            button_text,
            button_hover,
        });
    }
}

/// Section background decoded from the raw style columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Background {
    Solid {
        color: String,
    },
    Gradient {
        direction: String,
        colors: Vec<String>,
    },
    Image {
        url: String,
        overlay: Option<String>,
    },
}

/// Stored shape of `background_gradient`.
#[derive(Deserialize)]
struct GradientSpec {
    #[serde(default = "GradientSpec::direction_default")]
    direction: String,
    colors: Vec<String>,
}

impl GradientSpec {
    fn direction_default() -> String {
        "to bottom".into()
    }
}

impl Background {
    /// Pick the effective background: image, then gradient, then solid color.
    ///
    /// A gradient that is not valid JSON or has fewer than two colors is ignored.
    pub fn from_style(style: &SectionStyleModel) -> Option<Self> {
        fn non_empty(v: &Option<String>) -> Option<&str> {
            v.as_deref().map(str::trim).filter(|s| !s.is_empty())
        }

        if let Some(url) = non_empty(&style.background_image) {
            return Some(Background::Image {
                url: url.to_string(),
                overlay: non_empty(&style.background_overlay).map(str::to_string),
            });
        }
        if let Some(spec) = non_empty(&style.background_gradient)
            .and_then(|raw| serde_json::from_str::<GradientSpec>(raw).ok())
            .filter(|spec| spec.colors.len() >= 2)
        {
            return Some(Background::Gradient {
                direction: spec.direction,
                colors: spec.colors,
            });
        }
        non_empty(&style.background_color).map(|color| Background::Solid {
            color: color.to_string(),
        })
    }

    /// CSS `background` shorthand value.
    pub fn to_css(&self) -> String {
        match self {
            Background::Solid { color } => color.clone(),
            Background::Gradient { direction, colors } => {
                format!("linear-gradient({}, {})", direction, colors.join(", "))
            }
            Background::Image { url, .. } => format!("url(\"{url}\") center / cover no-repeat"),
        }
    }
}

/// A style row plus its decoded background, as returned by the style endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct StyleView {
    #[serde(flatten)]
    pub style: SectionStyleModel,
    pub background: Option<Background>,
    /// `background` rendered as a CSS shorthand value.
    pub css: Option<String>,
}

impl From<SectionStyleModel> for StyleView {
    fn from(style: SectionStyleModel) -> Self {
        let background = Background::from_style(&style);
        let css = background.as_ref().map(Background::to_css);
        StyleView {
            style,
            background,
            css,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> SectionStyleModel {
        SectionStyleModel {
            id: 1,
            section_key: "hero".into(),
            section_name: "Hero".into(),
            background_color: None,
            background_gradient: None,
            background_image: None,
            background_overlay: None,
            text_color: None,
            heading_color: None,
            subheading_color: None,
            font_family: None,
            font_size: None,
            card_background: None,
            card_border: None,
            card_radius: None,
            card_shadow: None,
            card_text_color: None,
            button_background: None,
            button_text: None,
            button_hover: None,
            is_published: false,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn image_wins_over_gradient_and_color() {
        let mut s = style();
        s.background_color = Some("#111".into());
        s.background_gradient = Some(r##"{"colors":["#000","#fff"]}"##.into());
        s.background_image = Some("/hero.jpg".into());
        s.background_overlay = Some("rgba(0,0,0,.4)".into());
        assert_eq!(
            Background::from_style(&s),
            Some(Background::Image {
                url: "/hero.jpg".into(),
                overlay: Some("rgba(0,0,0,.4)".into()),
            })
        );
    }

    #[test]
    fn gradient_wins_over_color() {
        let mut s = style();
        s.background_color = Some("#111".into());
        s.background_gradient =
            Some(r##"{"direction":"135deg","colors":["#000","#fff"]}"##.into());
        let bg = Background::from_style(&s).unwrap();
        assert_eq!(bg.to_css(), "linear-gradient(135deg, #000, #fff)");
    }

    #[test]
    fn malformed_gradient_falls_back_to_color() {
        let mut s = style();
        s.background_color = Some("#111".into());
        s.background_gradient = Some("linear-gradient(".into());
        assert_eq!(
            Background::from_style(&s),
            Some(Background::Solid {
                color: "#111".into()
            })
        );
        s.background_gradient = Some(r##"{"colors":["#000"]}"##.into());
        assert_eq!(Background::from_style(&s).unwrap().to_css(), "#111");
    }

    #[test]
    fn empty_style_has_no_background() {
        assert_eq!(Background::from_style(&style()), None);
    }

    #[test]
    fn patch_distinguishes_absent_from_null() {
        let patch: SectionStylePatch =
            serde_json::from_str(r##"{"text_color":null,"heading_color":"#222"}"##).unwrap();
        assert_eq!(patch.text_color, Some(None));
        assert_eq!(patch.heading_color, Some(Some("#222".into())));
        assert_eq!(patch.background_color, None);
    }

    #[test]
    fn view_flattens_row_and_adds_background() {
        let mut s = style();
        s.background_color = Some("#111".into());
        let json = serde_json::to_value(StyleView::from(s)).unwrap();
        assert_eq!(json["section_key"], "hero");
        assert_eq!(json["background_color"], "#111");
        assert_eq!(json["background"]["type"], "solid");
        assert_eq!(json["css"], "#111");
    }

    #[test]
    fn view_renders_image_css_and_null_without_background() {
        let mut s = style();
        let json = serde_json::to_value(StyleView::from(s.clone())).unwrap();
        assert!(json["css"].is_null());

        s.background_image = Some(" /hero.jpg ".into());
        let json = serde_json::to_value(StyleView::from(s)).unwrap();
        assert_eq!(json["css"], "url(\"/hero.jpg\") center / cover no-repeat");
    }
}
