use super::BlogPost;

pub static POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "intelligence-and-action-space",
        date: "January 2026",
        title: "Intelligence and Action Space",
        excerpt: "An intelligent system is one that, given its time horizon, moves toward actions that expand its future action space.",
        content: "An intelligent system is one that, given its time horizon, moves toward actions that expand its future action space.

This is a definition that differs from how we usually think about intelligence. We often measure IQ, problem-solving, or memory. But maybe intelligence is more about keeping doors open.

A system that only optimizes for short-term goals often closes off future possibilities. It does what gives the most return now, without thinking about what it costs later. An intelligent system does the opposite: it keeps the possibility space open as long as possible.

This applies to both humans and machines. Learning something new, building relationships, staying in good physical shape. All of these things expand your action space. They give you more choices later.

Maybe this is a better way to think about learning too. Not as accumulation of facts, but as expansion of action space. The more you learn, the more choices you have. The better you get at thinking, the more problems you can solve.

Intelligence is freedom in the future.",
    },
    BlogPost {
        slug: "consumption-vs-learning",
        date: "January 2026",
        title: "Consumption vs. Learning",
        excerpt: "We consume more content than ever before. But it's easy to forget the difference between consuming and learning.",
        content: "We consume more content than ever before. Short videos, reels, stories, threads. Everything is designed to hold our attention for seconds, not minutes.

It's not necessarily bad. Some of these formats are really good at communicating ideas quickly. But it's easy to forget the difference between consuming and learning.

When you watch a 30-second video about a complex topic, it feels like you're learning. But learning requires more than exposure. It requires reflection, repetition, and integration with what you already know.

What we need is not less content, but better tools for transforming content into learning. Ways to take what we see and turn it into something we actually remember and can use.

That's why we're building Luna. A podcast player that takes learning seriously. That helps you go from passive listening to active understanding.

Content isn't the problem. The problem is that we treat all content the same, when some of it actually deserves more attention.",
    },
    BlogPost {
        slug: "ai-in-ten-years",
        date: "January 2026",
        title: "AI in Ten Years",
        excerpt: "In 10 years, AI will be less visible but more integrated. The best tools disappear into the background.",
        content: "In 10 years, AI will be less visible but more integrated.

Today we talk about AI as a tool. Something you open, ask questions to, and get answers from. But that's not how technology usually ends up. The best tools disappear into the background.

In 10 years, AI won't be a chatbot. It will be a layer beneath everything you do. A context engine that understands what you're trying to achieve and helps you get there.

It won't feel magical. It will feel obvious. Just like autocorrect feels obvious now, even though it would have been science fiction 30 years ago.

But what won't be obvious is how this affects learning. If AI can always give you the answer, why learn anything?

The answer is that learning isn't about having answers. It's about building mental models that let you navigate the world. AI can give you facts, but it can't give you understanding.

Those who actively learn, who build deep models of how things work, will have a big advantage. Not because they know more than AI, but because they know how to use it.

In 10 years, the best learning tools won't be the ones that give you answers. They'll be the ones that help you ask better questions.",
    },
];
