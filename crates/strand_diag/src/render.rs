use crate::Diagnostic;

pub fn render_diagnostic(diag: &Diagnostic) -> String {
    let mut out = String::new();
    let code_str = diag.code.map(|c| format!(" [{c}]")).unwrap_or_default();
    out.push_str(&format!("{:?}{}", diag.severity, code_str));
    if let Some(op) = diag.operation {
        out.push_str(&format!(" in {op}()"));
    }
    out.push_str(": ");
    out.push_str(&diag.message);
    if let Some(h) = &diag.help {
        out.push('\n');
        out.push_str("  = help: ");
        out.push_str(h);
    }
    out
}

pub fn render_diagnostics(diags: &[Diagnostic]) -> String {
    let mut out = String::new();
    for (i, d) in diags.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_diagnostic(d));
    }
    out
}
