use crate::extract::{DESCRIPTION_NOT_FOUND, entry_from_html};
use crate::extract::strategy::{DescriptionStrategy, TitleStrategy};
use crate::results::LinkRecord;

fn link() -> LinkRecord {
    LinkRecord::new(
        "https://www.astrokot.kiev.ua/slovar/azimut.htm".to_string(),
        "Азимут".to_string(),
    )
}

fn describe(html: &str, strategy: DescriptionStrategy) -> String {
    entry_from_html(html, &link(), TitleStrategy::HeadingThenCell, strategy).description
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_captures_between_heading_and_references() {
        let html = "<html><body>\
            <h1>Зенит</h1>\
            <p>Точка небесной сферы.</p>\
            <p>Ещё текст.</p>\
            <h4>Литература</h4>\
            <p>Книга, которую нельзя захватывать.</p>\
            </body></html>";
        assert_eq!(
            describe(html, DescriptionStrategy::UntilReferences),
            "Точка небесной сферы. Ещё текст."
        );
    }

    #[test]
    fn test_heading_text_itself_is_not_captured() {
        let html = "<html><body><h1>Зенит</h1><h4>Литература</h4></body></html>";
        assert_eq!(describe(html, DescriptionStrategy::UntilReferences), "");
    }

    #[test]
    fn test_cell_matching_title_starts_capture() {
        let html = "<html><body>\
            <table><tr><td>Азимут</td></tr></table>\
            <p>Первый абзац.</p>\
            <table><tr><td>Вторая ячейка</td></tr></table>\
            <h4>Литература</h4>\
            <p>Источник.</p>\
            </body></html>";
        // No h1: the title falls back to the first cell, and that same cell
        // turns capture on without contributing its own text
        assert_eq!(
            describe(html, DescriptionStrategy::UntilReferences),
            "Первый абзац. Вторая ячейка"
        );
    }

    #[test]
    fn test_no_start_condition_means_empty_description() {
        let html = "<html><body><p>Только абзац, без заголовка.</p></body></html>";
        assert_eq!(describe(html, DescriptionStrategy::UntilReferences), "");
    }

    #[test]
    fn test_missing_marker_captures_to_end_of_document() {
        let html = "<html><body>\
            <h1>Т</h1>\
            <p>До.</p>\
            <p>Литература</p>\
            <p>После.</p>\
            </body></html>";
        // No h4 marker: scan runs to the end, and the marker-equal paragraph
        // is never accumulated
        assert_eq!(
            describe(html, DescriptionStrategy::UntilReferences),
            "До. После."
        );
    }

    #[test]
    fn test_marker_heading_with_extra_text_does_not_stop_scan() {
        let html = "<html><body>\
            <h1>Т</h1>\
            <p>До.</p>\
            <h4>Литература и источники</h4>\
            <p>После.</p>\
            </body></html>";
        assert_eq!(
            describe(html, DescriptionStrategy::UntilReferences),
            "До. После."
        );
    }

    #[test]
    fn test_newlines_flattened_to_spaces() {
        let html = "<html><body><h1>А</h1><p>Строка один\nстрока два.</p></body></html>";
        assert_eq!(
            describe(html, DescriptionStrategy::UntilReferences),
            "Строка один строка два."
        );
    }

    #[test]
    fn test_full_body_uses_text_container_and_skips_chrome() {
        let html = "<html><body>\
            <nav>Навигация</nav>\
            <div id=\"text\">\
            <script>var x = 1;</script>\
            <p>Полезный текст.</p>\
            <div class=\"menu\">Пункт меню</div>\
            </div>\
            </body></html>";
        assert_eq!(
            describe(html, DescriptionStrategy::FullBody),
            "Полезный текст."
        );
    }

    #[test]
    fn test_full_body_falls_back_to_body() {
        let html = "<html><body><header>Шапка</header><p>Просто текст.</p></body></html>";
        assert_eq!(describe(html, DescriptionStrategy::FullBody), "Просто текст.");
    }

    #[test]
    fn test_full_body_sentinel_when_empty() {
        let html = "<html><body><script>var x = 1;</script></body></html>";
        assert_eq!(
            describe(html, DescriptionStrategy::FullBody),
            DESCRIPTION_NOT_FOUND
        );
    }
}
