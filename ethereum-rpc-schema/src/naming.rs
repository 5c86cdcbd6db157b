/// Wire (camelCase) name of a domain (snake_case) field name.
///
/// One trailing underscore, used to dodge reserved words (`from_`, `type_`), is dropped first.
/// Every segment after the first gets its first letter upper-cased; the rest of each segment is
/// kept as is.
pub fn to_wire_name(name: &str) -> String {
    let name = name.strip_suffix('_').unwrap_or(name);
    let mut parts = name.split('_');

    let mut wire = String::with_capacity(name.len());
    wire.push_str(parts.next().unwrap_or_default());

    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            wire.extend(first.to_uppercase());
            wire.push_str(chars.as_str());
        }
    }

    wire
}
