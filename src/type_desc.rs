//! Converts JVM-style type descriptors (as stored in the DEX type pool) into
//! human-readable type names, e.g. `Ljava/lang/String;` -> `java.lang.String`,
//! `[[I` -> `int[][]`.

pub fn type_to_string(desc: &str) -> String {
    if desc.trim().is_empty() {
        return String::new();
    }

    let mut chars = desc.chars();
    match chars.next().unwrap() {
        'V' => "void".to_string(),
        'Z' => "boolean".to_string(),
        'B' => "byte".to_string(),
        'S' => "short".to_string(),
        'C' => "char".to_string(),
        'I' => "int".to_string(),
        'J' => "long".to_string(),
        'F' => "float".to_string(),
        'D' => "double".to_string(),
        'L' => {
            let inner = desc[1..].strip_suffix(';').unwrap_or(&desc[1..]);
            inner.replace('/', ".")
        }
        '[' => format!("{}[]", type_to_string(&desc[1..])),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives() {
        assert_eq!(type_to_string("V"), "void");
        assert_eq!(type_to_string("I"), "int");
        assert_eq!(type_to_string("Z"), "boolean");
    }

    #[test]
    fn reference_type() {
        assert_eq!(type_to_string("Ljava/lang/String;"), "java.lang.String");
    }

    #[test]
    fn nested_arrays() {
        assert_eq!(
            type_to_string("[[Ljava/lang/String;"),
            "java.lang.String[][]"
        );
        assert_eq!(type_to_string("[I"), "int[]");
    }

    #[test]
    fn empty_and_unknown() {
        assert_eq!(type_to_string(""), "");
        assert_eq!(type_to_string("   "), "");
        assert_eq!(type_to_string("?"), "unknown");
    }

    #[test]
    fn round_trips() {
        let dotted = "com.example.Widget";
        let desc = format!("L{};", dotted.replace('.', "/"));
        assert_eq!(type_to_string(&desc), dotted);

        let inner = "Ljava/lang/Object;";
        assert_eq!(
            type_to_string(&format!("[{}", inner)),
            format!("{}[]", type_to_string(inner))
        );
    }
}
