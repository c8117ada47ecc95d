use super::*;

// Shared fixtures: one controller function carrying the codemod corruption,
// and its expected repaired form.
fn broken_fn(name: &str) -> String {
    [
        format!("export async function {name}(req, res) {{"),
        "  try {".into(),
        "    doWork();".into(),
        "  } catch (error) {".into(),
        "    handleControllerError(error, res, ',".into(),
        "    extraJunk".into(),
        "  }".into(),
        "  }".into(),
        "}".into(),
    ]
    .join("\n")
}

fn fixed_fn(name: &str) -> String {
    [
        format!("export async function {name}(req, res) {{"),
        "  try {".into(),
        "    doWork();".into(),
        "  } catch (error) {".into(),
        format!("    handleControllerError(error, res, 'Controller.{name}');"),
        "  }".into(),
        "}".into(),
    ]
    .join("\n")
}

fn lone_close_count(text: &str) -> usize {
    text.split('\n').filter(|l| l.trim() == "}").count()
}

mod detector;
mod file_operations;
