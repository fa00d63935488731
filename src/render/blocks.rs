// HTML builders for each section kind. Text fields are escaped; `body` and
// repeater `content`/`answer` fields carry WYSIWYG HTML and are inserted
// as-is, matching how the admin editor stores them.

use serde_json::Value;

use crate::render::SectionKind;

pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escaped string field from a content payload, empty when absent
fn text(content: &Value, field: &str) -> String {
    content
        .get(field)
        .and_then(Value::as_str)
        .map(escape)
        .unwrap_or_default()
}

/// Raw HTML field (WYSIWYG output), empty when absent
fn html(content: &Value, field: &str) -> String {
    content
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn items(content: &Value) -> Vec<Value> {
    content
        .get("items")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn heading_block(content: &Value) -> String {
    let mut out = String::new();
    let heading = text(content, "heading");
    if !heading.is_empty() {
        out.push_str(&format!("<h2>{}</h2>", heading));
    }
    let subheading = text(content, "subheading");
    if !subheading.is_empty() {
        out.push_str(&format!("<p class=\"subheading\">{}</p>", subheading));
    }
    out
}

fn cta_button(content: &Value) -> String {
    let label = text(content, "ctaText");
    if label.is_empty() {
        return String::new();
    }
    let link = text(content, "ctaLink");
    let style = content
        .get("ctaStyle")
        .and_then(Value::as_str)
        .unwrap_or("primary");
    format!(
        "<a class=\"btn btn-{}\" href=\"{}\">{}</a>",
        escape(style),
        link,
        label
    )
}

fn hero(content: &Value, image_position: &str) -> String {
    let image = text(content, "imageUrl");
    let alt = text(content, "imageAlt");
    format!(
        "<div class=\"hero hero-{}\"><div class=\"hero-text\"><h1>{}</h1><p>{}</p>{}{}</div><img src=\"{}\" alt=\"{}\"/></div>",
        image_position,
        text(content, "heading"),
        text(content, "subheading"),
        html(content, "body"),
        cta_button(content),
        image,
        alt
    )
}

fn feature_grid(content: &Value, columns: u32) -> String {
    let cells: String = items(content)
        .iter()
        .map(|item| {
            format!(
                "<div class=\"feature\"><span class=\"icon\">{}</span><h3>{}</h3><p>{}</p></div>",
                text(item, "icon"),
                text(item, "title"),
                text(item, "description")
            )
        })
        .collect();
    format!(
        "{}<div class=\"grid grid-cols-{}\">{}</div>",
        heading_block(content),
        columns,
        cells
    )
}

pub fn render(kind: SectionKind, content: &Value) -> String {
    match kind {
        SectionKind::HeroImageRight => hero(content, "right"),
        SectionKind::HeroImageLeft => hero(content, "left"),
        SectionKind::HeroCentered => format!(
            "<div class=\"hero hero-centered\"><h1>{}</h1><p>{}</p>{}<img src=\"{}\" alt=\"{}\"/></div>",
            text(content, "heading"),
            text(content, "subheading"),
            cta_button(content),
            text(content, "imageUrl"),
            text(content, "imageAlt")
        ),
        SectionKind::TextBlock => format!(
            "{}<div class=\"prose\">{}</div>",
            heading_block(content),
            html(content, "body")
        ),
        SectionKind::TextImage => format!(
            "<div class=\"text-image text-image-{}\"><div>{}{}</div><img src=\"{}\" alt=\"{}\"/></div>",
            content
                .get("imagePosition")
                .and_then(Value::as_str)
                .unwrap_or("right"),
            heading_block(content),
            html(content, "body"),
            text(content, "imageUrl"),
            text(content, "imageAlt")
        ),
        SectionKind::TwoColumnText => {
            let columns: String = items(content)
                .iter()
                .map(|item| {
                    format!(
                        "<div class=\"column\"><h3>{}</h3>{}</div>",
                        text(item, "title"),
                        html(item, "content")
                    )
                })
                .collect();
            format!(
                "{}<div class=\"columns\">{}</div>",
                heading_block(content),
                columns
            )
        }
        SectionKind::FeatureGrid3 => feature_grid(content, 3),
        SectionKind::FeatureGrid2 => feature_grid(content, 2),
        SectionKind::FeatureList => {
            let entries: String = items(content)
                .iter()
                .map(|item| format!("<li>{}</li>", text(item, "text")))
                .collect();
            format!("{}<ul class=\"checklist\">{}</ul>", heading_block(content), entries)
        }
        SectionKind::CtaSimple => format!(
            "<div class=\"cta\">{}{}</div>",
            heading_block(content),
            cta_button(content)
        ),
        SectionKind::Newsletter => format!(
            "<div class=\"newsletter\">{}<form><input type=\"email\" placeholder=\"{}\"/><button>{}</button></form></div>",
            heading_block(content),
            text(content, "placeholder"),
            text(content, "ctaText")
        ),
        SectionKind::Testimonials => {
            let quotes: String = items(content)
                .iter()
                .map(|item| {
                    format!(
                        "<blockquote><p>{}</p><footer>{} - {}</footer></blockquote>",
                        text(item, "quote"),
                        text(item, "author"),
                        text(item, "role")
                    )
                })
                .collect();
            format!("{}{}", heading_block(content), quotes)
        }
        SectionKind::LogoCloud => {
            let logos: String = items(content)
                .iter()
                .map(|item| {
                    format!(
                        "<img src=\"{}\" alt=\"{}\"/>",
                        text(item, "imageUrl"),
                        text(item, "alt")
                    )
                })
                .collect();
            format!(
                "{}<div class=\"logos\">{}</div>",
                heading_block(content),
                logos
            )
        }
        SectionKind::Stats => {
            let figures: String = items(content)
                .iter()
                .map(|item| {
                    format!(
                        "<div class=\"stat\"><strong>{}</strong><span>{}</span></div>",
                        text(item, "number"),
                        text(item, "label")
                    )
                })
                .collect();
            format!(
                "{}<div class=\"stats\">{}</div>",
                heading_block(content),
                figures
            )
        }
        SectionKind::PricingTable => {
            let plans: String = items(content)
                .iter()
                .map(|item| {
                    let highlighted = item
                        .get("highlighted")
                        .and_then(Value::as_bool)
                        .unwrap_or(false);
                    let features: String = item
                        .get("features")
                        .and_then(Value::as_array)
                        .map(|list| {
                            list.iter()
                                .filter_map(Value::as_str)
                                .map(|f| format!("<li>{}</li>", escape(f)))
                                .collect()
                        })
                        .unwrap_or_default();
                    format!(
                        "<div class=\"plan{}\"><h3>{}</h3><p class=\"price\">{} {}{}</p><ul>{}</ul>{}</div>",
                        if highlighted { " plan-highlighted" } else { "" },
                        text(item, "name"),
                        text(item, "price"),
                        text(item, "currency"),
                        text(item, "unit"),
                        features,
                        cta_button(item)
                    )
                })
                .collect();
            format!(
                "{}<div class=\"pricing\">{}</div>",
                heading_block(content),
                plans
            )
        }
        SectionKind::Faq => {
            let entries: String = items(content)
                .iter()
                .map(|item| {
                    format!(
                        "<details><summary>{}</summary>{}</details>",
                        text(item, "question"),
                        html(item, "answer")
                    )
                })
                .collect();
            format!("{}{}", heading_block(content), entries)
        }
        SectionKind::ContactForm => {
            let fields: String = content
                .get("fields")
                .and_then(Value::as_array)
                .map(|list| {
                    list.iter()
                        .filter_map(Value::as_str)
                        .map(|f| format!("<input name=\"{}\" placeholder=\"{}\"/>", escape(f), escape(f)))
                        .collect()
                })
                .unwrap_or_default();
            format!(
                "{}<form class=\"contact\">{}<button>{}</button></form>",
                heading_block(content),
                fields,
                text(content, "ctaText")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_hero_uses_content_fields() {
        let content = json!({
            "heading": "Hello",
            "subheading": "World",
            "imageUrl": "/x.jpg",
            "imageAlt": "pic",
            "ctaText": "Go",
            "ctaLink": "/go",
        });
        let html = render(SectionKind::HeroImageRight, &content);
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("hero-right"));
        assert!(html.contains("href=\"/go\""));
    }

    #[test]
    fn test_pricing_highlights_plan() {
        let content = json!({
            "items": [
                {"name": "Basic", "price": "29", "currency": "CZK", "unit": "/mo", "highlighted": false, "features": ["A"]},
                {"name": "Pro", "price": "79", "currency": "CZK", "unit": "/mo", "highlighted": true, "features": ["A", "B"]},
            ]
        });
        let html = render(SectionKind::PricingTable, &content);
        assert_eq!(html.matches("plan-highlighted").count(), 1);
        assert!(html.contains("<li>B</li>"));
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let html = render(SectionKind::TextBlock, &json!({}));
        assert!(html.contains("prose"));
        assert!(!html.contains("<h2>"));
    }
}
