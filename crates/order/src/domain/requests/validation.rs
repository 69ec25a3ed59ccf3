use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Field(String),
    Index(usize),
}

/// Flattens nested validator output into `path: message` strings, ordered by
/// path with list positions compared numerically.
pub fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut collected = Vec::new();
    walk(errors, &[], &mut collected);
    collected.sort_by(|(a, _), (b, _)| a.cmp(b));

    collected
        .into_iter()
        .map(|(path, message)| format!("{}: {message}", render(&path)))
        .collect()
}

fn walk(errors: &ValidationErrors, prefix: &[Segment], out: &mut Vec<(Vec<Segment>, String)>) {
    for (field, kind) in errors.errors() {
        let mut path = prefix.to_vec();
        path.push(Segment::Field(field.to_string()));

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| match error.code.as_ref() {
                            "length" => "Invalid length".to_string(),
                            "range" => "Value out of range".to_string(),
                            "custom" => "Custom validation failed".to_string(),
                            _ => format!("Invalid {field}"),
                        });
                    out.push((path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => walk(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (idx, nested) in items {
                    let mut item_path = path.clone();
                    item_path.push(Segment::Index(*idx));
                    walk(nested, &item_path, out);
                }
            }
        }
    }
}

fn render(path: &[Segment]) -> String {
    let mut rendered = String::new();
    for segment in path {
        match segment {
            Segment::Field(name) if rendered.is_empty() => rendered.push_str(name),
            Segment::Field(name) => {
                rendered.push('.');
                rendered.push_str(name);
            }
            Segment::Index(idx) => rendered.push_str(&format!("[{idx}]")),
        }
    }
    rendered
}
