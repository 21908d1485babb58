/// Name reserved for a group's home page.
pub const INDEX_NAME: &str = "index";

/// A documentation page rendered locally from a template.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationSection {
    /// Identifier of the section, unique within its group by convention.
    pub name: String,
    /// Display title of the section.
    pub title: String,
    /// Template reference understood by the renderer.
    pub template: String,
    /// Site relative URL path, e.g. `/docs/intro/install`.
    pub path: String,
    pub enabled: bool,
}

impl DocumentationSection {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        template: impl Into<String>,
        path: impl Into<String>,
        enabled: bool,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            template: template.into(),
            path: path.into(),
            enabled,
        }
    }
}

/// A documentation entry that links away from the site.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalDocumentationSection {
    pub name: String,
    pub title: String,
    /// Absolute URL the entry links to.
    pub href: String,
    pub enabled: bool,
}

impl ExternalDocumentationSection {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        href: impl Into<String>,
        enabled: bool,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            href: href.into(),
            enabled,
        }
    }
}

/// A single entry in a documentation group, either a local page or an external link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Local(DocumentationSection),
    External(ExternalDocumentationSection),
}

impl Section {
    pub fn name(&self) -> &str {
        match self {
            Section::Local(section) => &section.name,
            Section::External(section) => &section.name,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Section::Local(section) => &section.title,
            Section::External(section) => &section.title,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            Section::Local(section) => section.enabled,
            Section::External(section) => section.enabled,
        }
    }

    /// Where a link to this section should point: the site path of a local
    /// section or the URL of an external one.
    pub fn href(&self) -> &str {
        match self {
            Section::Local(section) => &section.path,
            Section::External(section) => &section.href,
        }
    }

    pub fn is_external(&self) -> bool {
        matches! { self, Section::External(_) }
    }

    pub fn maybe_local(&self) -> Option<&DocumentationSection> {
        match self {
            Section::Local(ref section) => Some(section),
            _ => None,
        }
    }

    pub fn maybe_external(&self) -> Option<&ExternalDocumentationSection> {
        match self {
            Section::External(ref section) => Some(section),
            _ => None,
        }
    }
}

impl From<DocumentationSection> for Section {
    fn from(section: DocumentationSection) -> Self {
        Section::Local(section)
    }
}

impl From<ExternalDocumentationSection> for Section {
    fn from(section: ExternalDocumentationSection) -> Self {
        Section::External(section)
    }
}
