use anyhow::{bail, Context};
use serde::{de::DeserializeOwned, Deserialize};
use std::{fs::File, io::Read, path::Path, str::FromStr};
use toml::{value::Table, Value};
use tracing::debug;

use crate::{
    error::{Error, Result},
    model::DocumentationGroup,
};

/// Site navigation configuration, usually read from `docs.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Documentation groups in the order they are declared.
    pub groups: Vec<GroupConfig>,

    /// Any remaining configuration, left for renderers.
    rest: Value,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let mut buffer = String::new();
        File::open(path)
            .with_context(|| "Failed to open config file")?
            .read_to_string(&mut buffer)
            .with_context(|| "Failed to read config file")?;

        Config::from_str(&buffer)
    }

    /// Deserialize a top level table that is not part of the navigation itself.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.rest
            .get(key)
            .cloned()
            .map(|value| value.try_into())
            .transpose()
            .with_context(|| format!("Failed to deserialize config table `{key}`"))
    }

    /// Build every configured group, keeping declaration order for both groups and sections.
    pub fn build_groups(&self) -> Result<Vec<DocumentationGroup>> {
        self.groups.iter().map(GroupConfig::build).collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            rest: Value::Table(Table::default()),
        }
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = Value::deserialize(deserializer)?;
        let Value::Table(mut table) = raw else {
            return Err(D::Error::custom("docs.toml must always be a toml table"));
        };

        let groups: Vec<GroupConfig> = table
            .remove("group")
            .map(|groups| groups.try_into().map_err(D::Error::custom))
            .transpose()?
            .unwrap_or_default();

        let config = Config {
            groups,
            rest: Value::Table(table),
        };

        Ok(config)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        toml::from_str(source).with_context(|| "Attempted to parse invalid configuration file")
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct GroupConfig {
    /// Identifier of the group, used to build section paths.
    pub name: String,
    pub title: String,
    /// Optional home page of the group.
    pub index: Option<IndexConfig>,
    #[serde(default, rename = "section")]
    pub sections: Vec<SectionConfig>,
}

impl GroupConfig {
    pub fn build(&self) -> Result<DocumentationGroup> {
        let mut group = DocumentationGroup::new(&self.name, &self.title);

        if let Some(index) = &self.index {
            group.set_index(&index.title, &index.template);
        }

        for section in &self.sections {
            match (&section.template, &section.href) {
                (Some(template), None) => {
                    group.add_section(&section.name, &section.title, template, section.enabled)
                }
                (None, Some(href)) => {
                    group.add_external_section(&section.name, &section.title, href, section.enabled)
                }
                (Some(_), Some(_)) => bail!(
                    "Section `{}` in group `{}` must not set both `template` and `href`",
                    section.name,
                    self.name
                ),
                (None, None) => bail!(
                    "Section `{}` in group `{}` must set either `template` or `href`",
                    section.name,
                    self.name
                ),
            }
        }

        debug!(
            group = %group.name(),
            sections = group.len(),
            has_home = group.has_home(),
            "built documentation group"
        );

        Ok(group)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct IndexConfig {
    pub title: String,
    pub template: String,
}

/// A section entry. Exactly one of `template` (local page) or `href` (external link) is set.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SectionConfig {
    pub name: String,
    pub title: String,
    pub template: Option<String>,
    pub href: Option<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

#[cfg(test)]
mod test {
    use super::*;

    const SITE: &str = r#"
[[group]]
name = "intro"
title = "Introduction"
index = { title = "Intro", template = "tpl-home" }

[[group.section]]
name = "install"
title = "Install"
template = "tpl-install"

[[group.section]]
name = "faq"
title = "FAQ"
href = "https://example.com/faq"
enabled = false

[[group]]
name = "reference"
title = "Reference"
"#;

    #[test]
    fn parses_groups_in_order() {
        let config: Config = SITE.parse().expect("config failed to parse");

        assert_eq!(2, config.groups.len());
        assert_eq!("intro", config.groups[0].name);
        assert_eq!(
            Some(IndexConfig {
                title: String::from("Intro"),
                template: String::from("tpl-home"),
            }),
            config.groups[0].index
        );
        assert!(config.groups[0].sections[0].enabled);
        assert!(!config.groups[0].sections[1].enabled);
        assert!(config.groups[1].index.is_none());
        assert!(config.groups[1].sections.is_empty());
    }

    #[test]
    fn builds_documentation_groups() {
        let config: Config = SITE.parse().expect("config failed to parse");
        let groups = config.build_groups().expect("groups failed to build");

        let intro = &groups[0];
        assert_eq!(
            "/docs/intro",
            intro.home().expect("intro should have a home").href()
        );

        let names: Vec<_> = intro.iter().map(|section| section.name()).collect();
        assert_eq!(vec!["install", "faq"], names);

        let install = intro
            .find_section_by_name("install")
            .expect("install should exist");
        assert_eq!("/docs/intro/install", install.href());

        let faq = intro.find_section_by_name("faq").expect("faq should exist");
        assert!(faq.is_external());
        assert!(!faq.is_enabled());

        assert!(!groups[1].has_home());
    }

    #[test]
    fn empty_config_has_no_groups() {
        let config: Config = "".parse().expect("config failed to parse");

        assert_eq!(Config::default(), config);
        assert!(config
            .build_groups()
            .expect("groups failed to build")
            .is_empty());
    }

    #[test]
    fn rejects_sections_with_template_and_href() {
        let config: Config = r#"
[[group]]
name = "intro"
title = "Introduction"

[[group.section]]
name = "install"
title = "Install"
template = "tpl-install"
href = "https://example.com/install"
"#
        .parse()
        .expect("config failed to parse");

        let error = config.build_groups().expect_err("section is ambiguous");
        assert!(error.to_string().contains("must not set both"));
    }

    #[test]
    fn rejects_sections_without_target() {
        let config: Config = r#"
[[group]]
name = "intro"
title = "Introduction"

[[group.section]]
name = "install"
title = "Install"
"#
        .parse()
        .expect("config failed to parse");

        let error = config.build_groups().expect_err("section has no target");
        assert!(error.to_string().contains("must set either"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<Config> = r#"
[[group]]
name = "intro"
title = "Introduction"
colour = "blue"
"#
        .parse();

        assert!(result.is_err());
    }

    #[test]
    fn keeps_remaining_tables_for_renderers() {
        #[derive(Debug, Deserialize, PartialEq, Eq)]
        #[serde(rename_all = "kebab-case")]
        struct Theme {
            accent_color: String,
        }

        let config: Config = r#"
[theme]
accent-color = "purple"
"#
        .parse()
        .expect("config failed to parse");

        let theme: Option<Theme> = config.get("theme").expect("theme should deserialize");
        assert_eq!(
            Some(Theme {
                accent_color: String::from("purple")
            }),
            theme
        );

        let missing: Option<Theme> = config.get("missing").expect("missing is not an error");
        assert!(missing.is_none());
    }
}
