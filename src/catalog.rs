use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Technology {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip)]
    pub code_language: &'static str,
    pub topics: &'static [Topic],
}

static TECHNOLOGIES: [Technology; 7] = [
    Technology {
        id: "html",
        name: "HTML",
        code_language: "html",
        topics: &[
            Topic { id: "basics", name: "HTML Basics" },
            Topic { id: "elements", name: "HTML Elements" },
            Topic { id: "forms", name: "Forms & Input" },
            Topic { id: "semantic", name: "Semantic HTML" },
        ],
    },
    Technology {
        id: "css",
        name: "CSS",
        code_language: "css",
        topics: &[
            Topic { id: "selectors", name: "CSS Selectors" },
            Topic { id: "flexbox", name: "Flexbox" },
            Topic { id: "grid", name: "CSS Grid" },
            Topic { id: "animations", name: "Animations" },
        ],
    },
    Technology {
        id: "javascript",
        name: "JavaScript",
        code_language: "javascript",
        topics: &[
            Topic { id: "variables", name: "Variables" },
            Topic { id: "functions", name: "Functions" },
            Topic { id: "arrays", name: "Arrays" },
            Topic { id: "loops", name: "Loops" },
            Topic { id: "promises", name: "Promises & Async" },
        ],
    },
    Technology {
        id: "react",
        name: "React",
        code_language: "jsx",
        topics: &[
            Topic { id: "components", name: "Components" },
            Topic { id: "hooks", name: "Hooks" },
            Topic { id: "state", name: "State Management" },
            Topic { id: "props", name: "Props" },
        ],
    },
    Technology {
        id: "nodejs",
        name: "Node.js",
        code_language: "javascript",
        topics: &[
            Topic { id: "modules", name: "Modules" },
            Topic { id: "npm", name: "NPM" },
            Topic { id: "express", name: "Express.js" },
            Topic { id: "async", name: "Async Operations" },
        ],
    },
    Technology {
        id: "python",
        name: "Python",
        code_language: "python",
        topics: &[
            Topic { id: "basics", name: "Python Basics" },
            Topic { id: "functions", name: "Functions" },
            Topic { id: "classes", name: "Classes & OOP" },
            Topic { id: "lists", name: "Lists & Dictionaries" },
        ],
    },
    Technology {
        id: "typescript",
        name: "TypeScript",
        code_language: "typescript",
        topics: &[
            Topic { id: "types", name: "Type System" },
            Topic { id: "interfaces", name: "Interfaces" },
            Topic { id: "generics", name: "Generics" },
            Topic { id: "decorators", name: "Decorators" },
        ],
    },
];

pub fn technologies() -> &'static [Technology] {
    &TECHNOLOGIES
}

pub fn find_technology(id: &str) -> Option<&'static Technology> {
    TECHNOLOGIES.iter().find(|tech| tech.id == id)
}

impl Technology {
    pub fn find_topic(&self, id: &str) -> Option<&'static Topic> {
        self.topics.iter().find(|topic| topic.id == id)
    }
}

pub fn code_language(technology_id: &str) -> &'static str {
    find_technology(technology_id)
        .map(|tech| tech.code_language)
        .unwrap_or("")
}
