// CMS record types stored as JSON documents

pub mod page;
pub mod section;
pub mod template;

pub use page::{CreatePage, Page, PageWithSections, UpdatePage};
pub use section::{CreateSection, Section, SectionStyle, UpdateSection};
pub use template::{FieldKind, FieldSpec, SectionTemplate};

/// Collection names for the document store - everything is a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Pages,
    Sections,
    SectionTemplates,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Pages => "pages",
            Collection::Sections => "sections",
            Collection::SectionTemplates => "section_templates",
        }
    }
}
