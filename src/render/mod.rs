// Section renderer dispatch - maps a section's type tag onto a rendering
// handler. Unknown types degrade to a visible placeholder instead of
// failing the whole page assembly.

pub mod blocks;

use tracing::warn;

use crate::models::{PageWithSections, Section, SectionStyle};

/// Closed vocabulary of renderable section kinds. Parsing keeps an
/// unknown branch so not-yet-implemented template types degrade
/// gracefully instead of crashing the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    HeroImageRight,
    HeroImageLeft,
    HeroCentered,
    TextBlock,
    TextImage,
    TwoColumnText,
    FeatureGrid3,
    FeatureGrid2,
    FeatureList,
    CtaSimple,
    Newsletter,
    Testimonials,
    LogoCloud,
    Stats,
    PricingTable,
    Faq,
    ContactForm,
}

impl SectionKind {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "hero-image-right" => Some(Self::HeroImageRight),
            "hero-image-left" => Some(Self::HeroImageLeft),
            "hero-centered" => Some(Self::HeroCentered),
            "text-block" => Some(Self::TextBlock),
            "text-image" => Some(Self::TextImage),
            "two-column-text" => Some(Self::TwoColumnText),
            "feature-grid-3" => Some(Self::FeatureGrid3),
            "feature-grid-2" => Some(Self::FeatureGrid2),
            "feature-list" => Some(Self::FeatureList),
            "cta-simple" => Some(Self::CtaSimple),
            "newsletter" => Some(Self::Newsletter),
            "testimonials" => Some(Self::Testimonials),
            "logo-cloud" => Some(Self::LogoCloud),
            "stats" => Some(Self::Stats),
            "pricing-table" => Some(Self::PricingTable),
            "faq" => Some(Self::Faq),
            "contact-form" => Some(Self::ContactForm),
            _ => None,
        }
    }
}

/// Inline style attribute from a section's style overrides
fn style_attr(style: &SectionStyle) -> String {
    let mut rules = Vec::new();
    if let Some(color) = &style.background_color {
        rules.push(format!("background-color:{}", color));
    }
    if let Some(color) = &style.text_color {
        rules.push(format!("color:{}", color));
    }
    if let Some(pad) = &style.padding_top {
        rules.push(format!("padding-top:{}", pad));
    }
    if let Some(pad) = &style.padding_bottom {
        rules.push(format!("padding-bottom:{}", pad));
    }
    if let Some(image) = &style.background_image {
        rules.push(format!("background-image:url('{}')", image));
    }
    if rules.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", rules.join(";"))
    }
}

/// Render a single section to HTML. Inactive sections are skipped
/// entirely; unknown types produce a clearly-marked placeholder and a
/// warning-level diagnostic.
pub fn render_section(section: &Section) -> Option<String> {
    if !section.is_active {
        return None;
    }

    let kind = match SectionKind::parse(&section.section_type) {
        Some(kind) => kind,
        None => {
            warn!("Unknown section type: {}", section.section_type);
            return Some(format!(
                "<div class=\"section-error\">Unknown section type: {}</div>",
                blocks::escape(&section.section_type)
            ));
        }
    };

    let body = blocks::render(kind, &section.content);
    Some(format!(
        "<section class=\"section section-{}\"{}>{}</section>",
        section.section_type,
        style_attr(&section.style),
        body
    ))
}

/// Assemble a full page: sections in order, inactive ones dropped
pub fn render_page(page: &PageWithSections) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<main class=\"page page-{}\">",
        blocks::escape(&page.page.slug)
    ));
    for section in &page.sections {
        if let Some(rendered) = render_section(section) {
            html.push_str(&rendered);
        }
    }
    html.push_str("</main>");
    html
}
