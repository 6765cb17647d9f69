use serde::{Deserialize, Serialize};

use super::merge::{self, Scope, Values};
use super::null_as_default;
use crate::error::BuildError;
use crate::template::TemplateSet;
use crate::theme::ThemeSet;

/// One template invocation plus its own variables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Name of the template to render
    pub name: String,

    /// Variables set on this module; these win over every other scope
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Values,
}

impl Module {
    /// Create a module
    #[must_use]
    pub fn new(name: impl Into<String>, values: Values) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Copy of this module with the file and collection scopes merged in
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownTheme`] if a scope names an unknown theme.
    pub fn merged(
        &self,
        file: Scope<'_>,
        collection: Scope<'_>,
        themes: &ThemeSet,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            name: self.name.clone(),
            values: merge::merge_scopes(&self.values, file, collection, themes)?,
        })
    }

    /// Render this module's template against its values
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Render`] if the template is missing or fails.
    pub fn render(&self, templates: &TemplateSet) -> Result<String, BuildError> {
        let text = templates
            .render(&self.name, &self.values)
            .map_err(|source| BuildError::Render {
                module: self.name.clone(),
                source,
            })?;
        tracing::debug!(module = %self.name, bytes = text.len(), "Rendered module");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize() {
        let module: Module =
            serde_json::from_value(json!({"name": "greet", "values": {"name": "Ann"}})).unwrap();
        assert_eq!(module.name, "greet");
        assert_eq!(module.values["name"], json!("Ann"));
    }

    #[test]
    fn test_deserialize_missing_or_null_values() {
        let missing: Module = serde_json::from_value(json!({"name": "a"})).unwrap();
        let null: Module = serde_json::from_value(json!({"name": "a", "values": null})).unwrap();
        assert!(missing.values.is_empty());
        assert!(null.values.is_empty());
    }

    #[test]
    fn test_render_scenario_with_theme() {
        let themes: ThemeSet = [(
            "dark".to_string(),
            json!({"color": "black"}).as_object().cloned().unwrap(),
        )]
        .into_iter()
        .collect();
        let templates =
            TemplateSet::from_sources([("greet", "Hello [[.name]], color [[.color]]")]).unwrap();
        let module = Module::new(
            "greet",
            json!({"name": "Ann"}).as_object().cloned().unwrap(),
        );

        let file_themes = vec!["dark".to_string()];
        let merged = module
            .merged(
                Scope::new(&Values::new(), &file_themes),
                Scope::new(&Values::new(), &[]),
                &themes,
            )
            .unwrap();

        assert_eq!(merged.render(&templates).unwrap(), "Hello Ann, color black");
        assert_eq!(module.values.len(), 1);
    }

    #[test]
    fn test_render_unknown_template() {
        let templates = TemplateSet::from_sources([("greet", "hi")]).unwrap();
        let err = Module::new("missing", Values::new())
            .render(&templates)
            .unwrap_err();
        assert!(matches!(err, BuildError::Render { ref module, .. } if module == "missing"));
    }

    #[test]
    fn test_render_type_mismatch() {
        let templates = TemplateSet::from_sources([("sum", "[[ .a + .b ]]")]).unwrap();
        let module = Module::new(
            "sum",
            json!({"a": 1, "b": [1]}).as_object().cloned().unwrap(),
        );
        assert!(matches!(
            module.render(&templates),
            Err(BuildError::Render { .. })
        ));
    }
}
