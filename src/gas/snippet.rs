//! Text templates for the gas.js bootstrap snippet.

use std::fmt::{self, Display, Formatter};

use crate::gas::args::CallArgs;
use crate::gas::constants::PUSH_PLACEHOLDER;

/// One `_gas.push([...]);` line of the rendered snippet.
#[derive(Clone, Debug, PartialEq)]
pub struct PushStatement {
    method: String,
    args: Option<CallArgs>,
}

impl PushStatement {
    pub fn new(method: impl Into<String>, args: Option<CallArgs>) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }

    /// Method name as emitted, including any namespace prefix.
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn args(&self) -> Option<&CallArgs> {
        self.args.as_ref()
    }

    pub fn to_js(&self) -> String {
        self.to_string()
    }
}

impl Display for PushStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.args {
            Some(args) => write!(f, "_gas.push(['{}', {args}]);", self.method),
            None => write!(f, "_gas.push(['{}']);", self.method),
        }
    }
}

fn tag_template(script_url: &str) -> String {
    format!(
        "<script type=\"text/javascript\">
var _gas = _gas || [];
{PUSH_PLACEHOLDER}

(function() {{
var ga = document.createElement('script');
ga.type = 'text/javascript';
ga.async = true;
ga.src = '{script_url}';
var s = document.getElementsByTagName('script')[0];
s.parentNode.insertBefore(ga, s);
}})();
</script>"
    )
}

/// Wraps the statements in the loader template. Every statement is preceded by a newline.
pub(crate) fn render_tag(script_url: &str, statements: &[PushStatement]) -> String {
    let push_block: String = statements
        .iter()
        .map(|statement| format!("\n{statement}"))
        .collect();
    // The placeholder precedes the script URL, so only the first occurrence is substituted.
    tag_template(script_url).replacen(PUSH_PLACEHOLDER, &push_block, 1)
}
