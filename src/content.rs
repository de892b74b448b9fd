// Static copy shown on the landing page.

pub const BRAND: &str = "運命の綴り手";
pub const AUTHOR: &str = "源明";
pub const BOOKING_LABEL: &str = "無料鑑定を予約する";
pub const COPYRIGHT: &str = "© 2024 Genmei / Kawahara Genmei.";

pub struct CardCopy {
    pub name: &'static str,
    pub meaning: &'static str,
    pub hint: &'static str,
}

pub const DESTINY_CARD: CardCopy = CardCopy {
    name: "宿命の算命学",
    meaning: "二人の相性",
    hint: "生年月日から、片思いの彼との宿命的な相性を読み解きます。",
};

pub const TAROT_CARD: CardCopy = CardCopy {
    name: "真実のタロット",
    meaning: "彼の本音",
    hint: "今この瞬間、曖昧な関係の彼があなたに抱いている「本音」を映し出します。",
};

pub const COLOR_SCORE_CARD: CardCopy = CardCopy {
    name: "未来の色譜",
    meaning: "恋の行方",
    hint: "三ヶ月以内に、二人の関係がどう動くのか。その物語の続きを予見します。",
};

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 3] = [
    FaqEntry {
        question: "片思いの相手の気持ちはどこまで具体的に分かりますか？",
        answer: "タロットで今の彼の心の温度を読み、算命学で二人の宿命を重ねます。「今、彼はあなたをどう意識しているか」「次に何を求めているか」を、一つの物語として具体的にお伝えします。",
    },
    FaqEntry {
        question: "曖昧な関係に白黒つけたいのですが、鑑定は怖い結果になりませんか？",
        answer: "源明の鑑定は、単なる『脈あり・なし』の宣告ではありません。たとえ今が厳しい状況でも、どう動けば物語の続きをあなたらしく描けるか、という建設的な視点で執筆します。",
    },
    FaqEntry {
        question: "無料相談では何が分かりますか？",
        answer: "あなたの宿命に基づいた基本的な恋愛傾向と、現在のお悩みに対する一通の短いメッセージを、物語鑑定書のサンプルとしてお届けします。",
    },
];

pub const AWARD_BADGE: &str = "アルファポリス第15回ファンタジー小説大賞 奨励賞受賞(最終23位) ※1";
pub const AWARD_CITATION: &str =
    "※1 アルファポリス 第15回ファンタジー小説大賞 結果発表ページにて、奨励賞として掲載";
pub const AWARD_DETAIL: &str = "（『神様と呼ばれた医師の異世界転生物語』・村雨勇・最終順位23位）";
pub const AWARD_LINK_LABEL: &str = "アルファポリス公式結果発表ページを新しいタブで開く";

pub const DISCLAIMERS: [&str; 2] = [
    "※本サービスは占いおよび物語制作サービスです。将来の出来事を100%保証するものではありません。医療、法律等の専門的な助言は各専門家へご相談ください。",
    "※ご提供する内容は、占術および物語表現による解釈であり、感じ方・受け取り方には個人差があります。特定の効果を約束するものではありません。",
];

pub struct LegalSection {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const TERMS: &[LegalSection] = &[
    LegalSection {
        heading: "第1条（適用）",
        body: "本規約は、源明（以下「当方」）が提供する占い鑑定および物語鑑定書の制作サービス（以下「本サービス」）の利用に関する一切の関係に適用されます。",
    },
    LegalSection {
        heading: "第2条（サービスの性質）",
        body: "本サービスは占術および物語表現による解釈を提供するものであり、将来の出来事や特定の効果を保証するものではありません。",
    },
    LegalSection {
        heading: "第3条（禁止事項）",
        body: "鑑定書の無断転載・再配布、虚偽の情報による申込み、その他当方が不適切と判断する行為を禁止します。",
    },
    LegalSection {
        heading: "第4条（免責）",
        body: "鑑定内容に基づく利用者の判断および行動について、当方は責任を負いません。医療・法律等の専門的な判断は各専門家へご相談ください。",
    },
];

pub const PRIVACY: &[LegalSection] = &[
    LegalSection {
        heading: "取得する情報",
        body: "お名前（ニックネーム可）、生年月日、ご相談内容、連絡先など、鑑定に必要な範囲の情報をお預かりします。",
    },
    LegalSection {
        heading: "利用目的",
        body: "お預かりした情報は鑑定書の作成およびご連絡のためにのみ利用し、それ以外の目的には利用しません。",
    },
    LegalSection {
        heading: "第三者提供",
        body: "法令に基づく場合を除き、ご本人の同意なく第三者に提供することはありません。",
    },
    LegalSection {
        heading: "お問い合わせ",
        body: "個人情報の開示・訂正・削除のご請求は、予約フォームよりご連絡ください。",
    },
];

pub const COMMERCIAL_TRANSACTIONS: &[LegalSection] = &[
    LegalSection {
        heading: "販売事業者",
        body: "源明（川原源明）",
    },
    LegalSection {
        heading: "所在地・電話番号",
        body: "ご請求があった場合には遅滞なく開示いたします。",
    },
    LegalSection {
        heading: "販売価格",
        body: "初回限定の一頁の託宣（無料診断）は0円です。通常鑑定は5,500円（税込）です。",
    },
    LegalSection {
        heading: "提供時期",
        body: "お申込み内容の確認後、順次鑑定書をお届けします。",
    },
    LegalSection {
        heading: "キャンセル・返金",
        body: "サービスの性質上、鑑定書のお届け後の返金はお受けしておりません。",
    },
];
