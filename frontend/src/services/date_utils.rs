use js_sys::Date;

/// Current UTC date as `YYYY-MM-DD`, the value a date input expects
pub fn today_iso() -> String {
    let iso = String::from(Date::new_0().to_iso_string());
    iso.chars().take(10).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_iso_shape() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
        assert!(today[..4].chars().all(|c| c.is_ascii_digit()));
    }
}
