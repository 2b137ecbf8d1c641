use electrical_load_toolbox::ui_cli::language_choice;

#[test]
fn menu_numbers_map_to_language_codes() {
    assert_eq!(language_choice("1"), Some("auto"));
    assert_eq!(language_choice("2"), Some("ko"));
    assert_eq!(language_choice(" 3 "), Some("en-us"));
}

#[test]
fn unsupported_selection_is_rejected() {
    // 잘못된 번호는 None이어야 설정 메뉴가 "변경되었습니다"를 찍지 않는다.
    assert_eq!(language_choice("4"), None);
    assert_eq!(language_choice("ko"), None);
    assert_eq!(language_choice(""), None);
}
