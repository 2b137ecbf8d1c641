use electrical_load_toolbox::i18n::{keys, Translator};

// GUI는 프레임마다 라벨을 다시 조회하므로 소유 문자열을 돌려주는
// text() 경로를 쓴다. 언어팩이 로드된 번역기에서도 동작해야 한다.

#[test]
fn text_resolves_pack_strings() {
    let tr = Translator::new_with_pack("en-us", None);
    assert_eq!(tr.text(keys::REPORT_GROUP_KV), "Group usage coefficient Kv");
    assert_eq!(tr.text(keys::REPORT_BUSBAR_APPARENT), "Busbar apparent power [kVA]");
}

#[test]
fn text_is_stable_across_repeated_calls() {
    let tr = Translator::new_with_pack("en-us", None);
    let first = tr.text(keys::REPORT_GROUP_KV);
    let second = tr.text(keys::REPORT_GROUP_KV);
    assert_eq!(first, second);
}

#[test]
fn text_falls_back_to_built_in_strings() {
    // 언어팩 없는 번역기: 내장 테이블로 해석된다.
    let tr = Translator::new("en");
    assert_eq!(tr.text(keys::REPORT_GROUP_ACTIVE), "Group active load [kW]");
    let tr_ko = Translator::new("ko");
    assert_eq!(tr_ko.text(keys::REPORT_GROUP_ACTIVE), "그룹 계산 유효 부하 [kW]");
}

#[test]
fn all_report_labels_resolve_in_both_languages() {
    let report_keys = [
        keys::REPORT_GROUP_KV,
        keys::REPORT_GROUP_EFFECTIVE,
        keys::REPORT_GROUP_LOAD_FACTOR,
        keys::REPORT_GROUP_ACTIVE,
        keys::REPORT_GROUP_REACTIVE,
        keys::REPORT_GROUP_APPARENT,
        keys::REPORT_GROUP_CURRENT,
        keys::REPORT_BUSBAR_KV,
        keys::REPORT_BUSBAR_EFFECTIVE,
        keys::REPORT_BUSBAR_DEMAND_FACTOR,
        keys::REPORT_BUSBAR_ACTIVE,
        keys::REPORT_BUSBAR_REACTIVE,
        keys::REPORT_BUSBAR_APPARENT,
        keys::REPORT_BUSBAR_CURRENT,
    ];
    for lang in ["ko-kr", "en-us"] {
        let tr = Translator::new_with_pack(lang, None);
        for key in report_keys {
            let label = tr.text(key);
            assert!(!label.is_empty(), "{lang}/{key}");
            assert_ne!(label, "[missing translation]", "{lang}/{key}");
        }
    }
}
