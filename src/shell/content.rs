//! Fixed text shown by the informational commands and `cat`

pub const ABOUT: &str = "👨‍💻 Gunangi Bhagat - Full-Stack Web Developer

I'm passionate about creating beautiful, functional, and user-friendly
web applications. With expertise in modern frontend and backend
technologies, I love bringing ideas to life on the web.

Current focus:
• Advanced React patterns and Next.js
• Building scalable backend systems
• Contributing to open-source projects
• Exploring AI/ML integration in web apps

📧 Contact: your.email@example.com
🔗 GitHub: github.com/Gunangi
💼 LinkedIn: linkedin.com/in/yourprofile";

pub const PROJECTS: &str = "📂 Featured Projects:

1. E-Commerce Platform
   Technologies: React, Node.js, MongoDB
   Status: Completed ✅

2. Task Management App
   Technologies: Next.js, TypeScript, PostgreSQL
   Status: Completed ✅

3. Weather Dashboard
   Technologies: React, Chart.js, APIs
   Status: Completed ✅

4. Real-time Chat App
   Technologies: React, Socket.io, Node.js
   Status: Completed ✅

Type 'cd projects' to explore project directories.";

pub const SKILLS: &str = "🛠️ Technical Skills:

Frontend Development:
▓▓▓▓▓▓▓▓▓░ JavaScript (ES6+)
▓▓▓▓▓▓▓▓▓░ React.js
▓▓▓▓▓▓▓▓░░ Next.js
▓▓▓▓▓▓▓▓▓▓ HTML5/CSS3

Backend Development:
▓▓▓▓▓▓▓▓░░ Node.js
▓▓▓▓▓▓▓▓░░ Express.js
▓▓▓▓▓▓▓░░░ Python
▓▓▓▓▓▓▓░░░ Django

Database & Tools:
▓▓▓▓▓▓▓▓░░ MongoDB
▓▓▓▓▓▓▓░░░ PostgreSQL
▓▓▓▓▓▓▓▓▓░ Git/GitHub
▓▓▓▓▓▓░░░░ Docker";

pub const CONTACT: &str = "📞 Contact Information:

📧 Email: your.email@example.com
🌐 Website: https://yourportfolio.com
🔗 GitHub: https://github.com/Gunangi
💼 LinkedIn: https://linkedin.com/in/yourprofile
🐦 Twitter: https://twitter.com/yourusername

📍 Location: Your City, Country
🟢 Status: Available for opportunities

Feel free to reach out for collaborations, job opportunities,
or just to say hello! 👋";

pub const RESUME_OPENING: &str = "📄 Resume download initiated...\nOpening resume in new tab...";

pub const README_MD: &str = "# Gunangi Bhagat's Portfolio

🖥️ Dynamic CLI-Themed Portfolio

A modern, responsive portfolio website built with vanilla JavaScript
featuring a terminal-inspired design and smooth animations.

## Features
- CLI-inspired user interface
- Responsive design
- Smooth animations
- Project showcase
- Skills visualization
- Contact information

## Tech Stack
- HTML5, CSS3, JavaScript
- CSS Grid & Flexbox
- Custom animations
- Progressive Web App features

Built with ❤️ and lots of ☕";

pub const PACKAGE_JSON: &str = r#"{
  "name": "portfolio",
  "version": "1.0.0",
  "description": "Personal portfolio website",
  "main": "index.html",
  "scripts": {
    "start": "serve .",
    "build": "npm run minify",
    "deploy": "gh-pages -d ."
  },
  "keywords": ["portfolio", "web-developer", "javascript"],
  "author": "Gunangi Bhagat",
  "license": "MIT"
}"#;

pub const SKILLS_JSON: &str = r#"{
  "frontend": [
    "JavaScript",
    "React",
    "CSS3",
    "HTML5"
  ],
  "backend": [
    "Node.js",
    "Express",
    "Python",
    "Django"
  ],
  "database": [
    "MongoDB",
    "PostgreSQL",
    "Redis"
  ],
  "tools": [
    "Git",
    "Docker",
    "AWS",
    "Vercel"
  ]
}"#;

/// Files `cat` knows, by literal name
const FILES: [(&str, &str); 3] = [
    ("README.md", README_MD),
    ("package.json", PACKAGE_JSON),
    ("skills.json", SKILLS_JSON),
];

/// Contents of a canned file
pub fn file(name: &str) -> Option<&'static str> {
    FILES
        .iter()
        .find(|(file, _)| *file == name)
        .map(|(_, body)| *body)
}
