//! End-to-end localization: formatters against synthetic catalogs.

use humane::{Delta, Gender, RelativeOptions};
use humane_i18n::testing::encode_mo;
use tempfile::TempDir;

fn catalog_dir(locale: &str, entries: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let lc = dir.path().join(locale).join("LC_MESSAGES");
    std::fs::create_dir_all(&lc).unwrap();
    std::fs::write(lc.join("humane.mo"), encode_mo(entries)).unwrap();
    dir
}

fn russian_dir() -> TempDir {
    let meta = "Plural-Forms: nplurals=3; plural=n%10==1 && n%100!=11 ? 0 : \
                n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2;\n";
    catalog_dir(
        "ru_RU",
        &[
            ("", meta),
            ("a moment", "мгновение"),
            ("now", "сейчас"),
            ("a minute", "минута"),
            (
                "%d minute\0%d minutes",
                "%d минута\0%d минуты\0%d минут",
            ),
            ("%s ago", "%s назад"),
        ],
    )
}

#[test]
fn scoped_activation_localizes_and_restores() {
    let dir = russian_dir();
    let before = humane::relative_time(Delta::from_secs(300));
    assert_eq!(before, "5 minutes ago");
    {
        let _guard = humane::scoped("ru_RU", Some(dir.path())).unwrap();
        assert_eq!(humane::relative_time(Delta::from_secs(300)), "5 минут назад");
        assert_eq!(humane::relative_time(Delta::from_secs(150)), "3 минуты назад");
        assert_eq!(humane::relative_time(Delta::from_secs(61)), "минута назад");
        assert_eq!(humane::relative_time(Delta::from_secs(0)), "сейчас");
    }
    assert_eq!(humane::relative_time(Delta::from_secs(300)), before);
}

#[test]
fn explicit_locale_leaves_thread_state_alone() {
    let dir = russian_dir();
    let locale = humane::Locale::load("ru_RU", Some(dir.path())).unwrap();
    let options = RelativeOptions::default();
    assert_eq!(
        humane::time::relative_time_with(&locale, Delta::from_secs(121), &options),
        "2 минуты назад"
    );
    assert!(humane::current().is_source());
    assert_eq!(humane::relative_time(Delta::from_secs(121)), "2 minutes ago");
}

#[test]
fn missing_entries_fall_back_to_source() {
    let dir = russian_dir();
    let locale = humane::Locale::load("ru_RU", Some(dir.path())).unwrap();
    let options = RelativeOptions::default();
    assert_eq!(
        humane::time::natural_delta_with(&locale, Delta::new(1, 0, 0), &options),
        "a day"
    );
}

#[test]
fn separators_follow_the_locale() {
    let dir = catalog_dir("de_DE", &[("now", "jetzt")]);
    let locale = humane::Locale::load("de_DE", Some(dir.path())).unwrap();
    assert_eq!(humane::grouped_with(&locale, 1_234_567), "1.234.567");
    assert_eq!(
        humane::grouped_f64_with(&locale, 1234.5, 1).unwrap(),
        "1.234,5"
    );
    assert_eq!(
        humane::number::word_scale_with(&locale, 1_250_000.0, 1).unwrap(),
        "1,3 million"
    );
}

#[test]
fn ordinal_suffixes_resolve_through_context() {
    let dir = catalog_dir(
        "es_ES",
        &[
            ("1 (male)\u{4}st", "º"),
            ("1 (female)\u{4}st", "ª"),
        ],
    );
    let locale = humane::Locale::load("es_ES", Some(dir.path())).unwrap();
    assert_eq!(humane::ordinal_with(&locale, 1, Gender::Male), "1º");
    assert_eq!(humane::ordinal_with(&locale, 1, Gender::Female), "1ª");
    // No entry for this digit, so the source suffix survives.
    assert_eq!(humane::ordinal_with(&locale, 4, Gender::Male), "4th");
}

#[test]
fn english_activation_is_passthrough() {
    humane::activate("en_US", None).unwrap();
    assert_eq!(humane::relative_time(Delta::from_secs(300)), "5 minutes ago");
    assert!(humane::current().is_source());
    humane::deactivate();
}
