//! Placeholder substitution for per-domain vhost skeletons.

/// Token replaced by the domain name.
pub const DOMAIN_PLACEHOLDER: &str = "<domainname>";

/// Token replaced by the module snippet file names.
pub const INCLUDES_PLACEHOLDER: &str = "<includes>";

/// Separator between snippet names; matches the indent of the placeholder
/// inside the default vhost block.
const INCLUDE_SEPARATOR: &str = "\n    ";

/// Fill `skeleton` with `domain` and the module file names, one per line.
#[must_use]
pub fn render_vhost(skeleton: &str, domain: &str, module_files: &[&str]) -> String {
    let includes = module_files.join(INCLUDE_SEPARATOR);

    skeleton
        .replace(DOMAIN_PLACEHOLDER, domain)
        .replace(INCLUDES_PLACEHOLDER, &includes)
}
