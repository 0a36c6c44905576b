//! Prompt templates for keyword and problem generation

pub const KEYWORDS_SYSTEM_PROMPT: &str = "당신은 전문적인 어시스턴트 입니다.";

pub const PROBLEM_SYSTEM_PROMPT: &str = "당신은 전문적인 어시스턴트 입니다.";

/// JSON shape expected from the keyword prompt
pub const KEYWORDS_FORMAT: &str = r#"다음 JSON 스키마를 따르는 객체 하나만 출력하세요.
{"keywords": ["<키워드>", "..."]}
- keywords: 상식 퀴즈 주제로 쓸 키워드 문자열 목록"#;

/// JSON shape expected from the problem prompt
pub const PROBLEM_FORMAT: &str = r#"다음 JSON 스키마를 따르는 객체 하나만 출력하세요.
{"category": "...", "subject": "...", "story_idea": "...", "right_text": ["..."], "wrong_text": ["..."]}
- category: 주어진 분야
- subject: 분야의 세부 주제
- story_idea: 세부 주제를 바탕으로 정한 글감
- right_text: 500자 이상, 15개 문장의 글을 문장 단위로 자른 리스트
- wrong_text: right_text의 각 문장을 잘못된 내용으로 바꾼 리스트 (right_text와 길이가 같아야 함)"#;

const KEYWORDS_USER_TEMPLATE: &str = r#"상식 퀴즈 생성을 위한 키워드를 다양하게 5개만 뽑아 주세요.

출력 형식을 반드시 준수하여 JSON으로 출력해주세요.

# 출력 형식(JSON):
{format_instructions}"#;

const PROBLEM_USER_TEMPLATE: &str = r#"분야는 {keyword} 입니다. 해당 분야에 대한 심층적인 글을 작성하려고 합니다. 다음 단계로 진행해주세요.

## 1단계: 세부 주제 도출
- 흥미롭고 의미 있는 세부 주제를 3~5개 제안해주세요.
- 독자가 관심을 가질 만한, 최신 트렌드나 일반적인 논의에서 발전된 주제여야 합니다.

## 2단계: 세부 주제 구체화 및 글감 선정
- 제안한 세부 주제 중 하나를 골라 구체화하세요.
- 핵심 내용을 다룰 글감(개념, 사건, 제품, 이론 등)을 명확하게 정하세요.

## 3단계: 글 작성
- 선정한 글감에 대해 **500~550자, 15문장 분량**의 글을 한 문단으로 작성하세요.
- **사실 기반**으로 작성하고, 문장이 논리적으로 이어지도록 하세요.

## 4단계: 올바른 문장과 잘못된 문장 생성
- 작성한 글을 문장 단위로 나누어 `right_text` 리스트로 저장하세요.
- 같은 구조를 유지하면서 **모든 문장을 사실과 다르게 바꾼 리스트(`wrong_text`)**를 만드세요.
  - 날짜, 인물, 사건, 특징 등을 바꿔 허위 정보를 만들되 문장 구조는 원본과 비슷해야 합니다.

## 5단계: JSON 출력
- 최종 결과만 반드시 JSON 형식으로 출력하세요:
{format_instructions}"#;

/// User prompt for keyword generation
pub fn keywords_user_prompt() -> String {
    KEYWORDS_USER_TEMPLATE.replace("{format_instructions}", KEYWORDS_FORMAT)
}

/// User prompt for problem generation about `keyword`
pub fn problem_user_prompt(keyword: &str) -> String {
    PROBLEM_USER_TEMPLATE
        .replace("{format_instructions}", PROBLEM_FORMAT)
        .replace("{keyword}", keyword)
}
