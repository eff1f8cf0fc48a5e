//! Functions that emit data for the wrapping shell function.
//!
//! The picker draws on stderr and keeps stdout for one machine-readable
//! payload line, so the wrapper can perform the actual route transition:
//! `__GP_VIEW__=<route>` hands the route to the schedule viewer command,
//! `__GP_HOME__=1` asks for the kiosk home-screen redirect after an idle
//! timeout.

const VIEW_PREFIX: &str = "__GP_VIEW__=";
const HOME_PREFIX: &str = "__GP_HOME__=";

/// Emit the machine-readable exit payload.
pub fn print_exit_payload(route: Option<&str>, idle_redirect: bool) {
    if let Some(route) = route {
        println!("{VIEW_PREFIX}{route}");
    } else if idle_redirect {
        println!("{HOME_PREFIX}1");
    }
}

/// Returns the bash function that users should add to their `.bashrc`.
///
/// The function name is `gpick` and it invokes the binary by its package
/// name (read from `Cargo.toml` at compile time).  The viewer and
/// home-redirect commands are configurable through `GROUP_PICK_VIEWER` and
/// `GROUP_PICK_HOME`.
pub fn bash_function() -> String {
    let bin = env!("CARGO_PKG_NAME");
    format!(
        r#"
# ── {bin}: group schedule picker ───────────────────────────
# Run `gpick`.  Picking a group launches the schedule viewer with the
# detail route; an idle session falls back to the kiosk home command.
gpick() {{
    local output
    output="$(command {bin} "$@")"
    local exit_code=$?
    local route=""
    local go_home=""
    while IFS= read -r line; do
        case "$line" in
            {VIEW_PREFIX}*) route="${{line#{VIEW_PREFIX}}}" ;;
            {HOME_PREFIX}*) go_home=1 ;;
        esac
    done <<< "$output"
    if [ $exit_code -eq 0 ] && [ -n "$route" ]; then
        "${{GROUP_PICK_VIEWER:-schedule-view}}" "$route"
    elif [ $exit_code -eq 0 ] && [ -n "$go_home" ]; then
        "${{GROUP_PICK_HOME:-true}}"
    fi
}}
"#
    )
}

/// Returns the zsh function that users should add to their `.zshrc`.
pub fn zsh_function() -> String {
    let bin = env!("CARGO_PKG_NAME");
    format!(
        r#"
# ── {bin}: group schedule picker ───────────────────────────
# Run `gpick`.  Picking a group launches the schedule viewer with the
# detail route; an idle session falls back to the kiosk home command.
gpick() {{
    local output
    output="$(command {bin} "$@")"
    local exit_code=$?
    local route=""
    local go_home=""
    while IFS= read -r line; do
        case "$line" in
            {VIEW_PREFIX}*) route="${{line#{VIEW_PREFIX}}}" ;;
            {HOME_PREFIX}*) go_home=1 ;;
        esac
    done <<< "$output"
    if [[ $exit_code -eq 0 ]] && [[ -n "$route" ]]; then
        "${{GROUP_PICK_VIEWER:-schedule-view}}" "$route"
    elif [[ $exit_code -eq 0 ]] && [[ -n "$go_home" ]]; then
        "${{GROUP_PICK_HOME:-true}}"
    fi
}}
"#
    )
}
