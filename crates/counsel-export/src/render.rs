use tera::{Context, Tera};
use tracing::debug;

use counsel_core::models::session::SessionRecord;
use counsel_core::references::reference_for_label;

use crate::error::ExportError;

/// Built-in report template. Context variables are the serialized
/// [`SessionRecord`] fields plus `reference`, the rendered citation line.
pub const DEFAULT_TEMPLATE: &str = "\
Approach: {{ approach }}

{{ recommendations }}

---
Reference: {{ reference }}
";

/// Render a session record with the built-in template.
pub fn render_report(record: &SessionRecord) -> Result<String, ExportError> {
    render_with_template("report", DEFAULT_TEMPLATE, record)
}

/// Render a session record with caller-supplied template content.
///
/// The record's fields become the template context variables, with the
/// citation line added under `reference`.
pub fn render_with_template(
    template_name: &str,
    template_content: &str,
    record: &SessionRecord,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let mut value = serde_json::to_value(record)?;
    if let Some(map) = value.as_object_mut() {
        map.insert(
            "reference".to_string(),
            serde_json::Value::String(reference_for_label(&record.approach).markdown()),
        );
    }

    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera
        .render(template_name, &context)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    debug!(template = template_name, bytes = rendered.len(), "report rendered");
    Ok(rendered)
}

/// Download filename for a report, with the approach label sanitized to
/// filename-safe characters.
pub fn suggested_filename(approach_label: &str) -> String {
    let safe: String = approach_label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("clinical_suggestions_{safe}.txt")
}
