//! Localized UI strings
//!
//! Only the strings the carried components actually render. The full
//! marketing copy lives with the content team, not in this crate.

use super::Locale;

pub struct UiStrings {
    pub header_slug: &'static str,
    pub get_app: &'static str,
    pub open_app: &'static str,
    pub credits_banner: &'static str,
    pub claim_credits: &'static str,
    pub copied: &'static str,
    pub step_install: &'static str,
    pub step_return: &'static str,
    pub wechat_guide_title: &'static str,
    pub wechat_guide_subtitle: &'static str,
    pub redirecting: &'static str,
}

static EN: UiStrings = UiStrings {
    header_slug: "Your AI idea companion",
    get_app: "Get App",
    open_app: "Open App",
    credits_banner: "Receive 100,000 AI Credits",
    claim_credits: "Claim Credits",
    copied: "Copied!",
    step_install: "Install ideaShell App",
    step_return: "Come back and accept the invitation, or enter the code in Settings",
    wechat_guide_title: "Tap the ··· menu",
    wechat_guide_subtitle: "and choose \"Open in Browser\"",
    redirecting: "Redirecting to your language preference...",
};

static ZH_CN: UiStrings = UiStrings {
    header_slug: "你的 AI 灵感伙伴",
    get_app: "获取应用",
    open_app: "打开应用",
    credits_banner: "领取 100,000 AI 积分",
    claim_credits: "领取积分",
    copied: "已复制！",
    step_install: "安装 ideaShell 应用",
    step_return: "返回此页接受邀请，或在设置中输入邀请码",
    wechat_guide_title: "点击右上角 ··· 菜单",
    wechat_guide_subtitle: "选择「在浏览器中打开」",
    redirecting: "正在跳转到你的语言偏好...",
};

static ZH_TW: UiStrings = UiStrings {
    header_slug: "你的 AI 靈感夥伴",
    get_app: "取得應用程式",
    open_app: "開啟應用程式",
    credits_banner: "領取 100,000 AI 點數",
    claim_credits: "領取點數",
    copied: "已複製！",
    step_install: "安裝 ideaShell 應用程式",
    step_return: "返回此頁接受邀請，或在設定中輸入邀請碼",
    wechat_guide_title: "點選右上角 ··· 選單",
    wechat_guide_subtitle: "選擇「在瀏覽器中開啟」",
    redirecting: "正在前往你的語言偏好...",
};

static JA: UiStrings = UiStrings {
    header_slug: "あなたのAIアイデアパートナー",
    get_app: "アプリを入手",
    open_app: "アプリを開く",
    credits_banner: "100,000 AIクレジットを受け取る",
    claim_credits: "クレジットを受け取る",
    copied: "コピーしました！",
    step_install: "ideaShellアプリをインストール",
    step_return: "このページに戻って招待を承認するか、設定でコードを入力してください",
    wechat_guide_title: "右上の ··· メニューをタップ",
    wechat_guide_subtitle: "「ブラウザで開く」を選択してください",
    redirecting: "言語設定へ移動しています...",
};

static ES: UiStrings = UiStrings {
    header_slug: "Tu compañero de ideas con IA",
    get_app: "Descargar app",
    open_app: "Abrir app",
    credits_banner: "Recibe 100.000 créditos de IA",
    claim_credits: "Reclamar créditos",
    copied: "¡Copiado!",
    step_install: "Instala la app ideaShell",
    step_return: "Vuelve aquí y acepta la invitación, o introduce el código en Ajustes",
    wechat_guide_title: "Toca el menú ···",
    wechat_guide_subtitle: "y elige \"Abrir en el navegador\"",
    redirecting: "Redirigiendo a tu idioma preferido...",
};

static PT_BR: UiStrings = UiStrings {
    header_slug: "Seu parceiro de ideias com IA",
    get_app: "Baixar app",
    open_app: "Abrir app",
    credits_banner: "Receba 100.000 créditos de IA",
    claim_credits: "Resgatar créditos",
    copied: "Copiado!",
    step_install: "Instale o app ideaShell",
    step_return: "Volte aqui e aceite o convite, ou insira o código em Configurações",
    wechat_guide_title: "Toque no menu ···",
    wechat_guide_subtitle: "e escolha \"Abrir no navegador\"",
    redirecting: "Redirecionando para seu idioma...",
};

static FR: UiStrings = UiStrings {
    header_slug: "Votre compagnon d'idées IA",
    get_app: "Obtenir l'app",
    open_app: "Ouvrir l'app",
    credits_banner: "Recevez 100 000 crédits IA",
    claim_credits: "Réclamer les crédits",
    copied: "Copié !",
    step_install: "Installez l'app ideaShell",
    step_return: "Revenez ici accepter l'invitation, ou saisissez le code dans Réglages",
    wechat_guide_title: "Touchez le menu ···",
    wechat_guide_subtitle: "puis « Ouvrir dans le navigateur »",
    redirecting: "Redirection vers votre langue...",
};

static DE: UiStrings = UiStrings {
    header_slug: "Dein KI-Ideenbegleiter",
    get_app: "App holen",
    open_app: "App öffnen",
    credits_banner: "Erhalte 100.000 KI-Credits",
    claim_credits: "Credits einlösen",
    copied: "Kopiert!",
    step_install: "Installiere die ideaShell-App",
    step_return: "Komm hierher zurück und nimm die Einladung an, oder gib den Code in den Einstellungen ein",
    wechat_guide_title: "Tippe auf das ···-Menü",
    wechat_guide_subtitle: "und wähle „Im Browser öffnen“",
    redirecting: "Weiterleitung zu deiner Sprache...",
};

pub fn ui_strings(locale: Locale) -> &'static UiStrings {
    match locale {
        Locale::En => &EN,
        Locale::ZhCn => &ZH_CN,
        Locale::ZhTw => &ZH_TW,
        Locale::Ja => &JA,
        Locale::Es => &ES,
        Locale::PtBr => &PT_BR,
        Locale::Fr => &FR,
        Locale::De => &DE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn every_locale_has_complete_strings() {
        for locale in Locale::ALL {
            let strings = ui_strings(locale);
            assert!(!strings.get_app.is_empty());
            assert!(!strings.wechat_guide_title.is_empty());
            assert!(!strings.redirecting.is_empty());
        }
    }
}
