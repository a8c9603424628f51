use alloc::string::String;

/// Download name for a converted upload: `<stem>.nim`.
///
/// The stem is the last path component minus its final extension. Leading
/// dots belong to the stem (`.hidden` has no extension). An empty stem
/// becomes `image`.
pub fn nim_file_name(original: &str) -> String {
    let name = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original);
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    let stem = match name.rfind('.') {
        Some(dot) if dot >= leading_dots => &name[..dot],
        _ => name,
    };
    let stem = if stem.is_empty() { "image" } else { stem };
    alloc::format!("{stem}.nim")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_extension() {
        assert_eq!(nim_file_name("photo.png"), "photo.nim");
        assert_eq!(nim_file_name("archive.tar.gz"), "archive.tar.nim");
        assert_eq!(nim_file_name("noext"), "noext.nim");
    }

    #[test]
    fn strips_directories() {
        assert_eq!(nim_file_name("/tmp/uploads/cat.jpeg"), "cat.nim");
        assert_eq!(nim_file_name("C:\\Users\\me\\dog.webp"), "dog.nim");
    }

    #[test]
    fn dotfiles_and_empty() {
        assert_eq!(nim_file_name(".hidden"), ".hidden.nim");
        assert_eq!(nim_file_name(""), "image.nim");
        assert_eq!(nim_file_name("dir/"), "image.nim");
        assert_eq!(nim_file_name(".png.jpg"), ".png.nim");
    }
}
