use std::{ptr, slice};

use tracing::trace;

use crate::error::NotFound;

use super::{DocumentationSection, ExternalDocumentationSection, Section, INDEX_NAME};

/// A named group of documentation sections with an optional home page.
///
/// Sections keep the order they were added in, which is both the iteration order
/// and the order used by the next/previous queries. The home page sits logically
/// before the first section but is not part of iteration.
///
/// Sections are compared by identity: the navigation queries expect a reference
/// obtained from this group, not an equal copy.
#[derive(Debug, Clone)]
pub struct DocumentationGroup {
    name: String,
    title: String,
    index: Option<Section>,
    sections: Vec<Section>,
}

impl DocumentationGroup {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            index: None,
            sections: Vec::new(),
        }
    }

    /// Set the home page of the group, served at `/docs/{name}`.
    /// A previously set home page is replaced.
    pub fn set_index(&mut self, title: impl Into<String>, template: impl Into<String>) {
        let path = format!("/docs/{}", self.name);
        trace!(group = %self.name, %path, "setting group index");

        self.index = Some(Section::Local(DocumentationSection::new(
            INDEX_NAME, title, template, path, true,
        )));
    }

    /// Append a local section served at `/docs/{group}/{name}`.
    pub fn add_section(
        &mut self,
        name: impl Into<String>,
        title: impl Into<String>,
        template: impl Into<String>,
        enabled: bool,
    ) {
        let name = name.into();
        let path = format!("/docs/{}/{}", self.name, name);
        trace!(group = %self.name, section = %name, %path, "adding section");

        self.sections.push(Section::Local(DocumentationSection::new(
            name, title, template, path, enabled,
        )));
    }

    /// Append a section linking to an external URL.
    pub fn add_external_section(
        &mut self,
        name: impl Into<String>,
        title: impl Into<String>,
        href: impl Into<String>,
        enabled: bool,
    ) {
        let section = ExternalDocumentationSection::new(name, title, href, enabled);
        trace!(group = %self.name, section = %section.name, href = %section.href, "adding external section");

        self.sections.push(Section::External(section));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn has_home(&self) -> bool {
        self.index.is_some()
    }

    pub fn home(&self) -> Result<&Section, NotFound> {
        self.index.as_ref().ok_or_else(|| NotFound::NoHome {
            group: self.name.clone(),
        })
    }

    /// Look up a section by name. `"index"` resolves to the home page when one is set,
    /// otherwise the first section with a matching name wins.
    pub fn find_section_by_name(&self, name: &str) -> Result<&Section, NotFound> {
        if name == INDEX_NAME {
            if let Some(index) = &self.index {
                return Ok(index);
            }
        }

        self.sections
            .iter()
            .find(|section| section.name() == name)
            .ok_or_else(|| NotFound::NoSuchSection {
                name: name.to_owned(),
            })
    }

    /// Whether `section` is the home page or one of the sections of this group.
    pub fn has_section(&self, section: &Section) -> bool {
        self.index
            .as_ref()
            .is_some_and(|index| ptr::eq(index, section))
            || self.sections.iter().any(|entry| ptr::eq(entry, section))
    }

    pub fn has_next_section(&self, section: &Section) -> Result<bool, NotFound> {
        let key = self.section_key(section)?;

        Ok(self.section_at(key + 1).is_some())
    }

    pub fn next_section(&self, section: &Section) -> Result<&Section, NotFound> {
        let key = self.section_key(section)?;

        self.section_at(key + 1)
            .ok_or_else(|| NotFound::NoNextSection {
                name: section.name().to_owned(),
            })
    }

    pub fn has_previous_section(&self, section: &Section) -> Result<bool, NotFound> {
        let key = self.section_key(section)?;

        Ok(self.section_at(key - 1).is_some())
    }

    pub fn previous_section(&self, section: &Section) -> Result<&Section, NotFound> {
        let key = self.section_key(section)?;

        self.section_at(key - 1)
            .ok_or_else(|| NotFound::NoPreviousSection {
                name: section.name().to_owned(),
            })
    }

    /// Iterate over the sections in the order they were added. The home page is not included.
    pub fn iter(&self) -> slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Position of `section` within the group. The home page sits at -1, directly
    /// before the first section.
    fn section_key(&self, section: &Section) -> Result<isize, NotFound> {
        if section.name() == INDEX_NAME {
            return Ok(-1);
        }

        self.sections
            .iter()
            .position(|entry| ptr::eq(entry, section))
            // NOTE: A Vec never holds more than isize::MAX elements.
            .map(|offset| offset as isize)
            .ok_or_else(|| NotFound::NotInGroup {
                name: section.name().to_owned(),
            })
    }

    fn section_at(&self, key: isize) -> Option<&Section> {
        usize::try_from(key)
            .ok()
            .and_then(|offset| self.sections.get(offset))
    }
}

impl<'a> IntoIterator for &'a DocumentationGroup {
    type Item = &'a Section;
    type IntoIter = slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
