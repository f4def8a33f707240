use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub call_to_action: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrialLesson {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contacts {
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub motto: &'static str,
    pub contacts: Contacts,
    pub courses: Vec<&'static str>,
    pub social: Vec<&'static str>,
    pub copyright: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub brand: &'static str,
    pub nav: Vec<NavLink>,
    pub login_href: &'static str,
    pub hero: Hero,
    pub trial_lessons: Vec<TrialLesson>,
    pub footer: Footer,
}

impl LandingPage {
    pub fn sankids() -> Self {
        Self {
            brand: "Sankids",
            nav: vec![
                NavLink { label: "Главная", href: "/" },
                NavLink { label: "Курсы", href: "/courses" },
                NavLink { label: "О нас", href: "/about" },
                NavLink { label: "Контакты", href: "/contacts" },
            ],
            login_href: "/auth",
            hero: Hero {
                headline: "Открой мир знаний вместе с Sankids",
                tagline: "Инновационный подход к образованию детей. Развиваем потенциал через игру и современные технологии.",
                call_to_action: "Записаться на пробный урок",
            },
            trial_lessons: vec![
                TrialLesson {
                    title: "Программирование",
                    description: "Основы кодирования через игровые проекты",
                    price: "1500₽",
                    duration: "45 минут",
                },
                TrialLesson {
                    title: "Цифровое искусство",
                    description: "Создание digital-иллюстраций и анимации",
                    price: "1500₽",
                    duration: "45 минут",
                },
                TrialLesson {
                    title: "Логика и математика",
                    description: "Развитие мышления через интерактивные задачи",
                    price: "1500₽",
                    duration: "45 минут",
                },
            ],
            footer: Footer {
                motto: "Развиваем потенциал детей через современное образование",
                contacts: Contacts {
                    phone: "+7 (999) 123-45-67",
                    email: "info@sankids.ru",
                    address: "г. Москва, ул. Примерная, 123",
                },
                courses: vec![
                    "Программирование",
                    "Робототехника",
                    "3D-моделирование",
                    "Веб-дизайн",
                ],
                social: vec!["VKontakte", "Telegram", "YouTube"],
                copyright: "© 2024 Sankids. Все права защищены.",
            },
        }
    }
}
