//! Remediation text for each check kind and finding

use crate::checks::catalog::{CheckDefinition, CheckKind};
use crate::checks::finding::{status_label, Finding};

const NOTHING_TO_FIX: &str = "Исправлений не требуется.";

impl CheckDefinition {
    /// Actionable recommendation for the given finding
    pub fn recommendation(&self, finding: &Finding) -> String {
        let url = &self.url;
        let target = &self.target;

        match (self.kind, finding) {
            (_, Finding::Redirected) | (_, Finding::CanonicalMatches) => NOTHING_TO_FIX.to_string(),

            (_, Finding::NoResponse) => format!(
                "Сервер не ответил на запрос {}. Проверьте DNS, SSL-сертификат и доступность сервера для этого варианта адреса.",
                url
            ),

            (CheckKind::Https, Finding::NoRedirect) => format!(
                "Сайт доступен по HTTP без перенаправления. Настройте 301-редирект со всех http:// адресов на {}.",
                target
            ),
            (CheckKind::Www, Finding::NoRedirect) => format!(
                "Сайт отвечает и с www, и без www. Выберите главное зеркало и настройте 301-редирект с {} на {}.",
                url, target
            ),
            (_, Finding::NoRedirect) => format!(
                "Адрес {} открывается без редиректа и дублирует главное зеркало. Настройте прямой 301-редирект на {}.",
                url, target
            ),

            (_, Finding::TemporaryRedirect(status)) => format!(
                "Используется временный редирект {}. Замените его на постоянный 301 (или 308), чтобы поисковые системы склеили адреса.",
                status
            ),

            (_, Finding::RedirectChain(hops)) => format!(
                "Количество редиректов в цепочке: {}. Настройте правила так, чтобы {} вёл на {} одним 301-редиректом.",
                hops, url, target
            ),

            (_, Finding::RedirectTo404) => format!(
                "Редирект ведёт на несуществующую страницу. Исправьте правило: {} должен перенаправлять на {}.",
                url, target
            ),

            (_, Finding::FinalStatus(status)) => format!(
                "После редиректа сервер отвечает {}. Конечная страница {} должна отдавать 200.",
                status_label(*status),
                target
            ),

            (_, Finding::WrongTarget(landed)) => format!(
                "Редирект ведёт на {} вместо {}. Исправьте адрес назначения в правиле перенаправления.",
                landed, target
            ),

            (CheckKind::MultipleSlashes, Finding::Duplicate) => format!(
                "Адрес с повторяющимися слешами отдаёт 200 и создаёт дубль. Настройте 301-редирект, схлопывающий слеши, на {}.",
                target
            ),
            (CheckKind::LetterCase, Finding::Duplicate) => format!(
                "Адрес в другом регистре отдаёт 200. Поисковики обычно справляются с этим сами, но лучше настроить 301-редирект на {} или указать canonical.",
                target
            ),
            (CheckKind::IndexFile(file), Finding::Duplicate) => format!(
                "{} отдаёт 200 и дублирует главную страницу. Настройте 301-редирект на {} или отдавайте 404.",
                file.file_name(),
                target
            ),
            (CheckKind::TrailingSlash, Finding::Duplicate) => format!(
                "Адреса со слешем и без слеша в конце отдают 200. Выберите один формат и настройте 301-редирект на {}.",
                target
            ),
            (CheckKind::LegacyExtension, Finding::Duplicate) => format!(
                "Адрес с расширением .html отдаёт 200 и дублирует {}. Настройте 301-редирект или отдавайте 404.",
                target
            ),
            (_, Finding::Duplicate) => format!(
                "{} отдаёт 200 и дублирует {}. Настройте 301-редирект.",
                url, target
            ),

            (kind, Finding::NotFound) if kind.accepts_not_found() => format!(
                "{} отдаёт 404, дубля нет. {}",
                url, NOTHING_TO_FIX
            ),
            (_, Finding::NotFound) => format!(
                "Адрес отдаёт 404. Дубля нет, но пользователи с такими ссылками попадут на ошибку; лучше настроить 301-редирект на {}.",
                target
            ),

            (_, Finding::DirectStatus(status)) => format!(
                "Сервер отвечает {} на {}. Ожидается 301-редирект на {} или корректный 404.",
                status, url, target
            ),

            (_, Finding::RedirectBefore404(hops)) => format!(
                "Перед ответом 404 выполняется {} редирект(а). Несуществующие страницы должны сразу отдавать 404 без перенаправлений.",
                hops
            ),
            (_, Finding::RedirectInsteadOf404(status)) => format!(
                "Несуществующая страница перенаправляется на страницу с ответом {}. Отдавайте 404 по исходному адресу без редиректа.",
                status_label(*status)
            ),
            (_, Finding::SoftNotFound) => "Несуществующая страница отдаёт 200 (soft 404). Настройте сервер так, чтобы для неизвестных адресов возвращался код 404.".to_string(),

            (_, Finding::CanonicalMismatch(found)) => format!(
                "Canonical указывает на {}. Для страницы с UTM-метками canonical должен вести на {}.",
                found, target
            ),
            (_, Finding::CanonicalMissing) => format!(
                "На странице нет тега <link rel=\"canonical\">. Добавьте canonical с адресом {}, чтобы страницы с параметрами не считались дублями.",
                target
            ),
        }
    }
}
