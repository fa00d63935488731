// Section template catalog - the static library of section kinds.
// Each entry carries the default content new sections are seeded from and
// the field schema the admin edit form is generated from.

use once_cell::sync::Lazy;
use serde_json::json;

use crate::models::{FieldKind, FieldSpec, SectionTemplate};
use crate::store::DocId;

/// Catalog entry before persistence - id and creation timestamp are
/// assigned at seed time
#[derive(Debug, Clone)]
pub struct TemplateDef {
    pub template_type: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub thumbnail: &'static str,
    pub icon: Option<&'static str>,
    pub default_content: serde_json::Value,
    pub field_schema: Vec<FieldSpec>,
    pub order: i64,
}

impl TemplateDef {
    pub fn into_template(self, id: DocId, created_at: i64) -> SectionTemplate {
        SectionTemplate {
            id,
            template_type: self.template_type.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            thumbnail: self.thumbnail.to_string(),
            icon: self.icon.map(|s| s.to_string()),
            default_content: self.default_content,
            field_schema: self.field_schema,
            order: self.order,
            is_active: true,
            created_at,
        }
    }
}

fn field(name: &str, kind: FieldKind, label: &str, required: bool) -> FieldSpec {
    FieldSpec {
        name: name.to_string(),
        kind,
        label: label.to_string(),
        required,
        placeholder: None,
        options: None,
    }
}

fn text(name: &str, label: &str, required: bool) -> FieldSpec {
    field(name, FieldKind::Text, label, required)
}

fn text_ph(name: &str, label: &str, required: bool, placeholder: &str) -> FieldSpec {
    FieldSpec {
        placeholder: Some(placeholder.to_string()),
        ..field(name, FieldKind::Text, label, required)
    }
}

fn wysiwyg(name: &str, label: &str, required: bool) -> FieldSpec {
    field(name, FieldKind::Wysiwyg, label, required)
}

fn image(name: &str, label: &str) -> FieldSpec {
    field(name, FieldKind::Image, label, false)
}

fn select(name: &str, label: &str, options: &[&str]) -> FieldSpec {
    FieldSpec {
        options: Some(options.iter().map(|s| s.to_string()).collect()),
        ..field(name, FieldKind::Select, label, false)
    }
}

fn repeater(name: &str, label: &str) -> FieldSpec {
    field(name, FieldKind::Repeater, label, true)
}

fn cta_fields(required: bool) -> Vec<FieldSpec> {
    vec![
        text("ctaText", "Button Text", required),
        text("ctaLink", "Button Link", required),
        select("ctaStyle", "Button Style", &["primary", "secondary", "outline"]),
    ]
}

/// The full static catalog, in picker display order
pub static SECTION_TEMPLATES: Lazy<Vec<TemplateDef>> = Lazy::new(|| {
    let mut hero_schema = vec![
        text_ph("heading", "Heading", true, "Main heading"),
        text_ph("subheading", "Subheading", false, "Secondary text"),
        wysiwyg("body", "Body Text", false),
        image("imageUrl", "Hero Image"),
        text("imageAlt", "Image Alt Text", false),
    ];
    hero_schema.extend(cta_fields(false));

    vec![
        // Hero
        TemplateDef {
            template_type: "hero-image-right",
            name: "Hero with Image (Right)",
            description: "Large hero section with text on left, image on right",
            category: "Hero",
            thumbnail: "/section-previews/hero-image-right.png",
            icon: Some("LayoutGrid"),
            default_content: json!({
                "heading": "Welcome to Our Company",
                "subheading": "Building amazing experiences",
                "body": "<p>We help businesses grow with innovative solutions.</p>",
                "imageUrl": "/placeholder-hero.jpg",
                "imageAlt": "Hero image",
                "imagePosition": "right",
                "ctaText": "Get Started",
                "ctaLink": "/contact",
                "ctaStyle": "primary",
            }),
            field_schema: hero_schema.clone(),
            order: 1,
        },
        TemplateDef {
            template_type: "hero-image-left",
            name: "Hero with Image (Left)",
            description: "Large hero section with image on left, text on right",
            category: "Hero",
            thumbnail: "/section-previews/hero-image-left.png",
            icon: Some("LayoutGrid"),
            default_content: json!({
                "heading": "Welcome to Our Company",
                "subheading": "Building amazing experiences",
                "body": "<p>We help businesses grow with innovative solutions.</p>",
                "imageUrl": "/placeholder-hero.jpg",
                "imageAlt": "Hero image",
                "imagePosition": "left",
                "ctaText": "Get Started",
                "ctaLink": "/contact",
                "ctaStyle": "primary",
            }),
            field_schema: hero_schema,
            order: 2,
        },
        TemplateDef {
            template_type: "hero-centered",
            name: "Hero Centered",
            description: "Centered hero with text and image below",
            category: "Hero",
            thumbnail: "/section-previews/hero-centered.png",
            icon: Some("AlignCenter"),
            default_content: json!({
                "heading": "Welcome to Our Platform",
                "subheading": "Powerful solutions for modern businesses",
                "ctaText": "Learn More",
                "ctaLink": "/about",
                "ctaStyle": "primary",
                "imageUrl": "/placeholder-hero.jpg",
                "imageAlt": "Hero image",
            }),
            field_schema: {
                let mut schema = vec![
                    text("heading", "Heading", true),
                    text("subheading", "Subheading", false),
                ];
                schema.extend(cta_fields(false));
                schema.push(image("imageUrl", "Hero Image"));
                schema.push(text("imageAlt", "Image Alt Text", false));
                schema
            },
            order: 3,
        },
        // Content
        TemplateDef {
            template_type: "text-block",
            name: "Text Block",
            description: "Simple text content block with WYSIWYG editor",
            category: "Content",
            thumbnail: "/section-previews/text-block.png",
            icon: Some("FileText"),
            default_content: json!({
                "heading": "Our Story",
                "body": "<p>Write your content here...</p>",
            }),
            field_schema: vec![
                text("heading", "Heading", false),
                wysiwyg("body", "Content", true),
            ],
            order: 10,
        },
        TemplateDef {
            template_type: "text-image",
            name: "Text + Image",
            description: "Text content with image side-by-side",
            category: "Content",
            thumbnail: "/section-previews/text-image.png",
            icon: Some("Columns"),
            default_content: json!({
                "heading": "About Us",
                "body": "<p>Learn more about our company...</p>",
                "imageUrl": "/placeholder.jpg",
                "imageAlt": "About image",
                "imagePosition": "right",
            }),
            field_schema: vec![
                text("heading", "Heading", false),
                wysiwyg("body", "Content", true),
                image("imageUrl", "Image"),
                text("imageAlt", "Image Alt Text", false),
                select("imagePosition", "Image Position", &["left", "right"]),
            ],
            order: 11,
        },
        TemplateDef {
            template_type: "two-column-text",
            name: "Two Column Text",
            description: "Text content split into two columns",
            category: "Content",
            thumbnail: "/section-previews/two-column.png",
            icon: Some("Columns"),
            default_content: json!({
                "heading": "Why Choose Us",
                "items": [
                    {"title": "Column 1", "content": "<p>First column content...</p>"},
                    {"title": "Column 2", "content": "<p>Second column content...</p>"},
                ],
            }),
            field_schema: vec![
                text("heading", "Heading", false),
                repeater("items", "Columns"),
            ],
            order: 12,
        },
        // Features
        TemplateDef {
            template_type: "feature-grid-3",
            name: "Feature Grid (3 Columns)",
            description: "Grid of features/services with icons (3 columns)",
            category: "Features",
            thumbnail: "/section-previews/feature-grid-3.png",
            icon: Some("Grid3x3"),
            default_content: json!({
                "heading": "Our Services",
                "subheading": "What we offer",
                "columns": 3,
                "items": [
                    {"icon": "Zap", "title": "Fast Performance", "description": "Lightning fast load times"},
                    {"icon": "Shield", "title": "Secure", "description": "Bank-level security"},
                    {"icon": "Users", "title": "Team Collaboration", "description": "Work together seamlessly"},
                ],
            }),
            field_schema: vec![
                text("heading", "Heading", false),
                text("subheading", "Subheading", false),
                repeater("items", "Features"),
            ],
            order: 20,
        },
        TemplateDef {
            template_type: "feature-grid-2",
            name: "Feature Grid (2 Columns)",
            description: "Grid of features/services with icons (2 columns)",
            category: "Features",
            thumbnail: "/section-previews/feature-grid-2.png",
            icon: Some("Grid2x2"),
            default_content: json!({
                "heading": "Our Services",
                "subheading": "What we offer",
                "columns": 2,
                "items": [
                    {"icon": "Zap", "title": "Fast Performance", "description": "Lightning fast load times"},
                    {"icon": "Shield", "title": "Secure", "description": "Bank-level security"},
                ],
            }),
            field_schema: vec![
                text("heading", "Heading", false),
                text("subheading", "Subheading", false),
                repeater("items", "Features"),
            ],
            order: 21,
        },
        TemplateDef {
            template_type: "feature-list",
            name: "Feature List",
            description: "Vertical list of features with checkmarks",
            category: "Features",
            thumbnail: "/section-previews/feature-list.png",
            icon: Some("List"),
            default_content: json!({
                "heading": "Everything You Need",
                "items": [
                    {"text": "Unlimited projects"},
                    {"text": "24/7 support"},
                    {"text": "Advanced analytics"},
                    {"text": "Custom integrations"},
                ],
            }),
            field_schema: vec![
                text("heading", "Heading", false),
                repeater("items", "Features"),
            ],
            order: 22,
        },
        // CTA
        TemplateDef {
            template_type: "cta-simple",
            name: "Simple CTA",
            description: "Call-to-action with heading and button",
            category: "CTA",
            thumbnail: "/section-previews/cta-simple.png",
            icon: Some("ArrowRight"),
            default_content: json!({
                "heading": "Ready to Get Started?",
                "subheading": "Join thousands of satisfied customers",
                "ctaText": "Start Free Trial",
                "ctaLink": "/signup",
                "ctaStyle": "primary",
            }),
            field_schema: {
                let mut schema = vec![
                    text("heading", "Heading", true),
                    text("subheading", "Subheading", false),
                ];
                schema.extend(cta_fields(true));
                schema
            },
            order: 30,
        },
        TemplateDef {
            template_type: "newsletter",
            name: "Newsletter Signup",
            description: "Email capture form for newsletter",
            category: "CTA",
            thumbnail: "/section-previews/newsletter.png",
            icon: Some("Mail"),
            default_content: json!({
                "heading": "Stay Updated",
                "subheading": "Get the latest news and updates",
                "ctaText": "Subscribe",
                "placeholder": "Enter your email",
            }),
            field_schema: vec![
                text("heading", "Heading", true),
                text("subheading", "Subheading", false),
                text("ctaText", "Button Text", true),
                text("placeholder", "Input Placeholder", false),
            ],
            order: 31,
        },
        // Social proof
        TemplateDef {
            template_type: "testimonials",
            name: "Testimonials",
            description: "Customer testimonials grid",
            category: "Social Proof",
            thumbnail: "/section-previews/testimonials.png",
            icon: Some("MessageSquare"),
            default_content: json!({
                "heading": "What Our Clients Say",
                "items": [
                    {
                        "quote": "Amazing service! Highly recommended.",
                        "author": "John Doe",
                        "role": "CEO, Company Inc",
                        "avatar": "/placeholder-avatar.jpg",
                    },
                ],
            }),
            field_schema: vec![
                text("heading", "Heading", false),
                repeater("items", "Testimonials"),
            ],
            order: 40,
        },
        TemplateDef {
            template_type: "logo-cloud",
            name: "Logo Cloud",
            description: "Grid of partner/client logos",
            category: "Social Proof",
            thumbnail: "/section-previews/logo-cloud.png",
            icon: Some("Image"),
            default_content: json!({
                "heading": "Trusted By Leading Companies",
                "items": [
                    {"imageUrl": "/logo-1.png", "alt": "Company 1"},
                    {"imageUrl": "/logo-2.png", "alt": "Company 2"},
                    {"imageUrl": "/logo-3.png", "alt": "Company 3"},
                ],
            }),
            field_schema: vec![
                text("heading", "Heading", false),
                repeater("items", "Logos"),
            ],
            order: 41,
        },
        TemplateDef {
            template_type: "stats",
            name: "Stats/Numbers",
            description: "Key statistics display",
            category: "Social Proof",
            thumbnail: "/section-previews/stats.png",
            icon: Some("BarChart"),
            default_content: json!({
                "heading": "Our Impact",
                "items": [
                    {"number": "10K+", "label": "Happy Clients"},
                    {"number": "50+", "label": "Projects Completed"},
                    {"number": "99%", "label": "Satisfaction Rate"},
                    {"number": "24/7", "label": "Support Available"},
                ],
            }),
            field_schema: vec![
                text("heading", "Heading", false),
                repeater("items", "Stats"),
            ],
            order: 42,
        },
        // Pricing
        TemplateDef {
            template_type: "pricing-table",
            name: "Pricing Table",
            description: "Pricing packages comparison",
            category: "Pricing",
            thumbnail: "/section-previews/pricing.png",
            icon: Some("DollarSign"),
            default_content: json!({
                "heading": "Simple, Transparent Pricing",
                "subheading": "Choose the plan that's right for you",
                "items": [
                    {
                        "name": "Basic",
                        "price": "29",
                        "currency": "CZK",
                        "unit": "/month",
                        "features": ["Feature 1", "Feature 2", "Feature 3"],
                        "ctaText": "Get Started",
                        "ctaLink": "/signup",
                        "highlighted": false,
                    },
                    {
                        "name": "Pro",
                        "price": "79",
                        "currency": "CZK",
                        "unit": "/month",
                        "features": ["Everything in Basic", "Feature 4", "Feature 5", "Priority Support"],
                        "ctaText": "Get Started",
                        "ctaLink": "/signup",
                        "highlighted": true,
                    },
                ],
            }),
            field_schema: vec![
                text("heading", "Heading", false),
                text("subheading", "Subheading", false),
                repeater("items", "Pricing Plans"),
            ],
            order: 50,
        },
        // Interactive
        TemplateDef {
            template_type: "faq",
            name: "FAQ Accordion",
            description: "Frequently asked questions with accordion",
            category: "Interactive",
            thumbnail: "/section-previews/faq.png",
            icon: Some("HelpCircle"),
            default_content: json!({
                "heading": "Frequently Asked Questions",
                "items": [
                    {"question": "How does it work?", "answer": "<p>It's simple! Just sign up and get started.</p>"},
                    {"question": "What's included?", "answer": "<p>Everything you need to succeed.</p>"},
                ],
            }),
            field_schema: vec![
                text("heading", "Heading", false),
                repeater("items", "Questions"),
            ],
            order: 60,
        },
        TemplateDef {
            template_type: "contact-form",
            name: "Contact Form",
            description: "Simple contact form",
            category: "Interactive",
            thumbnail: "/section-previews/contact-form.png",
            icon: Some("Send"),
            default_content: json!({
                "heading": "Get In Touch",
                "subheading": "We'd love to hear from you",
                "ctaText": "Send Message",
                "fields": ["name", "email", "message"],
            }),
            field_schema: vec![
                text("heading", "Heading", false),
                text("subheading", "Subheading", false),
                text("ctaText", "Button Text", true),
            ],
            order: 61,
        },
    ]
});
