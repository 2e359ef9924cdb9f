//! Builtin meal catalog
//!
//! Static, read-only catalog of known meals grouped by meal type. Entries
//! are fixed for the process lifetime; the catalog is never persisted.

use crate::domain::{Meal, MealType};

/// The static meal catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Entries in category-major order (breakfast, lunch, dinner)
    entries: Vec<(MealType, Meal)>,
}

fn meal(name: &str, description: &str, ingredients: &[&str]) -> Meal {
    Meal {
        name: name.to_string(),
        description: description.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
    }
}

impl Catalog {
    /// The builtin catalog
    pub fn builtin() -> Self {
        let breakfast = vec![
            meal("김치볶음밥", "매콤한 김치와 밥의 조화", &["김치", "밥", "계란", "파", "참기름"]),
            meal("토스트", "바삭한 식빵과 다양한 토핑", &["식빵", "버터", "잼", "치즈"]),
            meal("계란후라이", "간단하고 영양가 있는 아침식사", &["계란", "기름", "소금"]),
            meal("오트밀", "건강한 곡물 아침식사", &["오트밀", "우유", "과일", "견과류"]),
            meal("샌드위치", "든든한 아침 샌드위치", &["식빵", "햄", "치즈", "야채", "마요네즈"]),
            meal("죽", "부드럽고 소화 잘되는 죽", &["쌀", "물", "소금", "참기름"]),
            meal("시리얼", "간편한 아침식사", &["시리얼", "우유", "과일"]),
            meal("팬케이크", "달콤한 아침 디저트", &["밀가루", "계란", "우유", "설탕", "시럽"]),
        ];

        let lunch = vec![
            meal("불고기", "달콤짭짤한 한국 전통 요리", &["소고기", "양파", "당근", "간장", "설탕", "마늘"]),
            meal("김치찌개", "얼큰하고 시원한 국물요리", &["김치", "돼지고기", "두부", "파", "고춧가루"]),
            meal("된장찌개", "구수한 된장 국물", &["된장", "두부", "감자", "양파", "호박", "멸치육수"]),
            meal("비빔밥", "다양한 나물과 고추장의 조화", &["밥", "나물", "고추장", "계란", "참기름"]),
            meal("제육볶음", "매콤한 돼지고기 볶음", &["돼지고기", "양파", "고추장", "마늘", "생강"]),
            meal("닭갈비", "춘천 특산 매콤한 닭요리", &["닭고기", "양배추", "고추장", "양파", "떡"]),
            meal("갈비탕", "진한 국물의 보양식", &["갈비", "무", "파", "마늘", "후추"]),
            meal("삼겹살", "고소한 돼지고기 구이", &["삼겹살", "마늘", "상추", "쌈장"]),
            meal("치킨", "바삭한 튀김닭", &["닭고기", "밀가루", "기름", "양념"]),
            meal("파스타", "이탈리아 면요리", &["면", "토마토소스", "마늘", "올리브오일", "치즈"]),
        ];

        let dinner = vec![
            meal("삼계탕", "몸보신에 좋은 닭요리", &["닭", "인삼", "대추", "마늘", "찹쌀"]),
            meal("해물탕", "시원한 해산물 국물", &["새우", "조개", "오징어", "무", "미나리"]),
            meal("갈치조림", "짭짤한 생선조림", &["갈치", "무", "간장", "고춧가루", "마늘"]),
            meal("떡볶이", "매콤달콤한 분식", &["떡", "어묵", "양배추", "고추장", "설탕"]),
            meal("순두부찌개", "부드러운 두부찌개", &["순두부", "계란", "파", "고춧가루", "멸치육수"]),
            meal("bulgogi", "Korean marinated beef", &["beef", "soy sauce", "sugar", "garlic", "pear"]),
            meal("스테이크", "육즙 가득한 소고기", &["소고기", "소금", "후추", "마늘", "버터"]),
            meal("연어구이", "건강한 생선요리", &["연어", "레몬", "올리브오일", "허브", "소금"]),
            meal("카레", "향신료 가득한 인도요리", &["카레가루", "감자", "당근", "양파", "고기"]),
            meal("마라탕", "얼얼한 중국 훠궈", &["면", "야채", "고기", "마라소스", "두부"]),
        ];

        let mut entries = Vec::new();
        for (meal_type, meals) in [
            (MealType::Breakfast, breakfast),
            (MealType::Lunch, lunch),
            (MealType::Dinner, dinner),
        ] {
            entries.extend(meals.into_iter().map(|m| (meal_type, m)));
        }

        Self { entries }
    }

    /// All entries in catalog iteration order (category then list order)
    pub fn entries(&self) -> &[(MealType, Meal)] {
        &self.entries
    }

    /// Iterate entries in catalog iteration order
    pub fn iter(&self) -> impl Iterator<Item = (MealType, &Meal)> {
        self.entries.iter().map(|(meal_type, meal)| (*meal_type, meal))
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
