use rustc_version_runtime::version;

use crate::version::VERSION;

pub fn usage_text() -> String {
    let rust_version = version();

    format!(
        r#"
 **typeq {version}**

Check whether two typed character streams end up identical once every
backspace marker ('#') has been applied. Both strings are walked backwards
and compared lazily; the edited text is never built up in memory.

Built with Rust {rust_version}

# 1. Usage
* typeq check 'ab#c' 'ac'           Compare two operands, print true/false
* printf 'ab#c\nac\n' | typeq       Compare two lines read from stdin
* typeq check --show-reduced A B    Also print what each string reduces to

# 2. Semantics
* '#' deletes the nearest preceding character that is still standing
* A '#' with nothing left to delete does nothing
* The verdict never affects the exit status; only a malformed invocation
  (a single operand, or fewer than two stdin lines) exits non-zero

# 3. Configuration
* Settings live in ~/.typeq.yaml (see 'typeq settings list')

"#,
        version = VERSION,
        rust_version = rust_version,
    )
}
