use super::error::BreedError;

/// Derive a display label from a Dog CEO image URL.
///
/// The slug is the second-to-last `/` segment, e.g. `hound-afghan` in
/// `https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg`.
/// Only the first `-` becomes a space, then every space-separated word
/// gets its first character uppercased. Multi-hyphen sub-breed slugs keep
/// their remaining hyphens.
pub fn extract_breed(image_url: &str) -> Result<String, BreedError> {
    let segments: Vec<&str> = image_url.split('/').collect();
    if segments.len() < 2 {
        return Err(BreedError::TooFewSegments {
            url: image_url.to_string(),
        });
    }

    let slug = segments[segments.len() - 2];
    if slug.is_empty() {
        return Err(BreedError::EmptySlug {
            url: image_url.to_string(),
        });
    }

    let spaced = slug.replacen('-', " ", 1);
    let label = spaced
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ");

    Ok(label)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
