use heck::{ToLowerCamelCase, ToPascalCase};

use crate::ir::{HttpMethod, NormalizedName};

/// Resource name with the class and variable spellings the templates use.
pub fn normalize_name(name: &str) -> NormalizedName {
    NormalizedName {
        original: name.to_string(),
        pascal_case: pascal_case(name),
        camel_case: camel_case(name),
    }
}

/// `rebate_statement` → `RebateStatement`
pub fn pascal_case(name: &str) -> String {
    words(name).to_pascal_case()
}

/// `order_id` → `orderId`
pub fn camel_case(name: &str) -> String {
    words(name).to_lower_camel_case()
}

// heck splits on any non-alphanumeric character, so only the empty case needs help.
fn words(name: &str) -> &str {
    if name.chars().any(char::is_alphanumeric) {
        name
    } else {
        "unnamed"
    }
}

/// Method name for an operation without an `operationId`.
///
/// The verb picks the prefix and the literal segments make up the rest; a
/// trailing `{param}` turns `GET` into `get` and singularizes the last noun.
/// `GET /users` → `listUsers`, `GET /users/{id}` → `getUser`.
pub fn route_to_name(method: HttpMethod, path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let single = segments.last().is_some_and(|s| is_template(s));

    let prefix = match method {
        HttpMethod::Get if single => "get",
        HttpMethod::Get => "list",
        HttpMethod::Post => "create",
        HttpMethod::Put => "update",
        HttpMethod::Delete => "delete",
        HttpMethod::Patch => "patch",
        HttpMethod::Options => "options",
        HttpMethod::Head => "head",
    };

    let nouns: Vec<&str> = segments.into_iter().filter(|s| !is_template(s)).collect();
    let Some((last, rest)) = nouns.split_last() else {
        return prefix.to_string();
    };

    let mut name = prefix.to_string();
    for noun in rest {
        name.push_str(&pascal_case(noun));
    }
    if single {
        name.push_str(&pascal_case(&singular(last)));
    } else {
        name.push_str(&pascal_case(last));
    }
    name
}

fn is_template(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

/// `categories` → `category`, `orders` → `order`; anything else is unchanged.
fn singular(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies").filter(|s| !s.is_empty()) {
        format!("{stem}y")
    } else if let Some(stem) = word
        .strip_suffix('s')
        .filter(|s| !s.is_empty() && !s.ends_with('s'))
    {
        stem.to_string()
    } else {
        word.to_string()
    }
}
