//! Built-in content served when no LLM service is configured

use crate::domain::entities::{KeywordList, Problem};

/// Keywords substituted when LLM keyword generation fails
pub const FALLBACK_KEYWORDS: [&str; 3] = ["ChatGPT", "AI 규제", "우주 탐사"];

/// Menu keywords when running without an LLM
pub const OFFLINE_KEYWORDS: [&str; 5] = [
    "역사적 사건",
    "문화적 관습",
    "과학적 원리",
    "문학적 작품",
    "지리적 특징",
];

const SAMPLE_RIGHT_TEXT: [&str; 15] = [
    "양자 컴퓨팅은 고전적인 컴퓨팅과는 다른 방식으로 정보를 처리하는 기술이다.",
    "고전적인 컴퓨터는 비트를 사용하여 정보를 처리하지만, 양자 컴퓨터는 큐비트를 사용한다.",
    "큐비트는 중첩성과 얽힘이라는 양자 역학의 특성을 이용하여 동시에 여러 상태를 가질 수 있다.",
    "이러한 특성 덕분에 양자 컴퓨터는 특정 유형의 문제를 훨씬 더 빠르게 해결할 수 있다.",
    "양자 컴퓨팅의 응용 분야로는 암호 해독, 화학 모사, 최적화 문제 등이 있다.",
    "양자 컴퓨팅은 현재 연구 단계에 있으며, 상용화를 위한 노력이 진행 중이다.",
    "IBM, Google, Microsoft 등 여러 기업이 양자 컴퓨터 개발에 투자하고 있다.",
    "2019년 10월, Google은 양자 우월성을 달성했다고 발표했다.",
    "양자 우월성이란 양자 컴퓨터가 고전적인 컴퓨터보다 더 빠르게 문제를 해결할 수 있다는 것을 의미한다.",
    "양자 컴퓨팅은 미래 산업에 큰 영향을 미칠 것으로 예상된다.",
    "하지만 현재로서는 양자 컴퓨터의 안정성과 오류 수정 기술이 아직 완벽하지 않다.",
    "양자 컴퓨팅 연구자들은 이러한 문제를 해결하기 위해 노력하고 있다.",
    "양자 컴퓨팅의 발전은 과학과 기술 분야에서 큰 혁신을 가져올 것으로 기대된다.",
    "양자 컴퓨팅은 여전히 많은 연구와 개발이 필요한 분야이다.",
    "그러나 그 잠재력은 이미 많은 이들의 관심을 끌고 있다.",
];

const SAMPLE_WRONG_TEXT: [&str; 15] = [
    "양자 컴퓨팅은 고전적인 컴퓨팅과 동일한 방식으로 정보를 처리하는 기술이다.",
    "고전적인 컴퓨터는 큐비트를 사용하여 정보를 처리하지만, 양자 컴퓨터는 비트를 사용한다.",
    "비트는 중첩성과 얽힘이라는 고전 역학의 특성을 이용하여 동시에 여러 상태를 가질 수 없다.",
    "이러한 특성으로 인해 양자 컴퓨터는 특정 유형의 문제를 훨씬 더 느리게 해결한다.",
    "양자 컴퓨팅의 응용 분야로는 암호 생성, 물리 모사, 복잡화 문제 등이 있다.",
    "양자 컴퓨팅은 현재 상용화 단계에 있으며, 연구를 위한 노력이 진행 중이다.",
    "Apple, Samsung, Huawei 등 여러 기업이 양자 컴퓨터 개발에 투자하고 있다.",
    "2017년 5월, Microsoft는 양자 우월성을 달성했다고 발표했다.",
    "양자 우월성이란 고전적인 컴퓨터가 양자 컴퓨터보다 더 빠르게 문제를 해결할 수 있다는 것을 의미한다.",
    "양자 컴퓨팅은 미래 산업에 거의 영향을 미치지 않을 것으로 예상된다.",
    "현재로서는 양자 컴퓨터의 안정성과 오류 수정 기술이 이미 완벽하다.",
    "양자 컴퓨팅 연구자들은 이미 해결된 문제를 다시 연구하고 있다.",
    "양자 컴퓨팅의 발전은 과학과 기술 분야에서 큰 혁신을 가져오지 않을 것으로 기대된다.",
    "양자 컴퓨팅은 이미 완성된 분야이다.",
    "그러나 그 잠재력은 거의 관심을 끌지 않고 있다.",
];

pub fn fallback_keywords() -> KeywordList {
    KeywordList::new(FALLBACK_KEYWORDS)
}

pub fn offline_keywords() -> KeywordList {
    KeywordList::new(OFFLINE_KEYWORDS)
}

/// Sample problem about quantum computing, used for every keyword offline
pub fn sample_problem() -> Problem {
    Problem {
        category: "과학적 원리".to_string(),
        subject: "양자 컴퓨팅의 기본 원리와 응용".to_string(),
        story_idea: "양자 컴퓨팅의 기본 원리와 현재 응용 사례".to_string(),
        right_text: SAMPLE_RIGHT_TEXT.iter().map(|s| s.to_string()).collect(),
        wrong_text: SAMPLE_WRONG_TEXT.iter().map(|s| s.to_string()).collect(),
    }
}
