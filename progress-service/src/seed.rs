//! The fixed course and quiz catalog. Stands in for the upstream course
//! API until one exists.

use schema::{Course, Level, Module, Quiz, QuizQuestion};

fn module(id: &str, title: &str, content: &str) -> Module {
    Module {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    }
}

fn question(id: &str, text: &str, options: [&str; 4], correct_answer: usize) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        question: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "c001".to_string(),
            title: "Blockchain Fundamentals".to_string(),
            description: "Learn the basics of blockchain technology, including distributed ledgers, consensus mechanisms, and cryptographic principles.".to_string(),
            image_url: "https://images.unsplash.com/photo-1639322537228-f710d846310a?auto=format&fit=crop&q=80&w=500".to_string(),
            duration: "4 weeks".to_string(),
            level: Level::Beginner,
            modules: vec![
                module(
                    "m001",
                    "Introduction to Blockchain",
                    "Blockchain is a distributed ledger technology that enables secure, transparent, and immutable record-keeping without requiring a trusted third party. This module covers the fundamental concepts of blockchain, including its origin with Bitcoin, basic structure, and key features like decentralization and cryptographic security.",
                ),
                module(
                    "m002",
                    "Consensus Mechanisms",
                    "Consensus mechanisms are protocols that ensure all nodes in a blockchain network agree on the validity of transactions. This module explores various consensus algorithms including Proof of Work (PoW), Proof of Stake (PoS), and Delegated Proof of Stake (DPoS), discussing their advantages, limitations, and environmental implications.",
                ),
            ],
        },
        Course {
            id: "c002".to_string(),
            title: "Smart Contract Development".to_string(),
            description: "Master the creation and deployment of smart contracts using Solidity and industry best practices.".to_string(),
            image_url: "https://images.unsplash.com/photo-1639322537174-8c5b573bc1ce?auto=format&fit=crop&q=80&w=500".to_string(),
            duration: "6 weeks".to_string(),
            level: Level::Intermediate,
            modules: vec![
                module(
                    "m003",
                    "Solidity Basics",
                    "Solidity is a statically-typed programming language designed for developing smart contracts on the Ethereum blockchain. This module introduces the syntax, data types, functions, and control structures of Solidity, alongside environment setup and simple contract examples.",
                ),
                module(
                    "m004",
                    "Security Best Practices",
                    "Security is paramount in smart contract development as vulnerabilities can lead to significant financial losses. This module covers common security threats like reentrancy attacks, integer overflow/underflow, and front-running, along with best practices for secure contract development and tools for security auditing.",
                ),
            ],
        },
        Course {
            id: "c003".to_string(),
            title: "DeFi Protocols and Tokenomics".to_string(),
            description: "Explore decentralized finance protocols, tokenomics principles, and liquidity mechanisms.".to_string(),
            image_url: "https://images.unsplash.com/photo-1620321023374-d1a68fbc720d?auto=format&fit=crop&q=80&w=500".to_string(),
            duration: "5 weeks".to_string(),
            level: Level::Advanced,
            modules: vec![
                module(
                    "m005",
                    "DeFi Fundamentals",
                    "Decentralized Finance (DeFi) is an ecosystem of financial applications built on blockchain networks. This module explains the core components of DeFi including lending platforms, decentralized exchanges (DEXs), yield farming, and stablecoins, highlighting how they differ from traditional financial systems.",
                ),
                module(
                    "m006",
                    "Tokenomics Design",
                    "Tokenomics involves the economic model that governs a cryptocurrency or token. This module delves into token distribution strategies, supply mechanisms (inflation vs. deflation), utility value, governance rights, and how these factors influence a token's market behavior and long-term sustainability.",
                ),
            ],
        },
        Course {
            id: "c004".to_string(),
            title: "NFT Creation and Marketplaces".to_string(),
            description: "Learn to create, mint, and trade NFTs across various blockchain platforms and marketplaces.".to_string(),
            image_url: "https://images.unsplash.com/photo-1645954780061-2ec08619233a?auto=format&fit=crop&q=80&w=500".to_string(),
            duration: "3 weeks".to_string(),
            level: Level::Beginner,
            modules: vec![
                module(
                    "m007",
                    "NFT Fundamentals",
                    "Non-Fungible Tokens (NFTs) are unique digital assets verified using blockchain technology. This module covers the basic concepts of NFTs, including standards like ERC-721 and ERC-1155, properties of non-fungibility, and the technological infrastructure that supports NFTs.",
                ),
                module(
                    "m008",
                    "Creating and Minting NFTs",
                    "This module provides a hands-on approach to creating and minting NFTs. Topics include selecting the right blockchain platform, preparing digital content, metadata standards, minting processes, and considerations for storage solutions like IPFS to ensure longevity of the associated digital content.",
                ),
            ],
        },
    ]
}

pub fn quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            course_id: "c001".to_string(),
            questions: vec![
                question(
                    "q001",
                    "What is the primary purpose of blockchain technology?",
                    [
                        "To create digital currencies only",
                        "To maintain a centralized database",
                        "To ensure immutable and transparent record-keeping without trusted intermediaries",
                        "To replace traditional banking entirely",
                    ],
                    2,
                ),
                question(
                    "q002",
                    "Which consensus mechanism is used by Bitcoin?",
                    [
                        "Proof of Stake (PoS)",
                        "Proof of Work (PoW)",
                        "Delegated Proof of Stake (DPoS)",
                        "Proof of Authority (PoA)",
                    ],
                    1,
                ),
                question(
                    "q003",
                    "What is a hash function in blockchain technology?",
                    [
                        "A function that encrypts data for secure transmission",
                        "A function that converts any input data into a fixed-size string of bytes",
                        "A function that validates transactions on the network",
                        "A function that creates new cryptocurrency coins",
                    ],
                    1,
                ),
                question(
                    "q004",
                    "What problem does blockchain technology primarily solve?",
                    [
                        "Processing speed issues in computing",
                        "The double-spending problem",
                        "Internet bandwidth limitations",
                        "Software development complexity",
                    ],
                    1,
                ),
                question(
                    "q005",
                    "What is a 'block' in blockchain technology?",
                    [
                        "A type of cryptocurrency",
                        "A collection of transactions grouped together",
                        "A security feature to prevent hacking",
                        "A type of digital wallet",
                    ],
                    1,
                ),
            ],
        },
        Quiz {
            course_id: "c002".to_string(),
            questions: vec![
                question(
                    "q006",
                    "What language is commonly used for Ethereum smart contract development?",
                    ["JavaScript", "Python", "Solidity", "C++"],
                    2,
                ),
                question(
                    "q007",
                    "What is a 'gas fee' in Ethereum?",
                    [
                        "A fee paid to miners for processing transactions",
                        "A subscription fee for using the Ethereum network",
                        "A tax imposed by governments on cryptocurrency",
                        "A fee charged by wallet providers",
                    ],
                    0,
                ),
                question(
                    "q008",
                    "What is a reentrancy attack?",
                    [
                        "An attack that overwhelms the network with traffic",
                        "An attack where a contract calls back into the calling contract before the first execution is complete",
                        "An attack that steals private keys from users",
                        "An attack that modifies blockchain history",
                    ],
                    1,
                ),
                question(
                    "q009",
                    "Which of the following is NOT a feature of Solidity?",
                    [
                        "Contract inheritance",
                        "Native support for asynchronous operations",
                        "Event emission",
                        "Function modifiers",
                    ],
                    1,
                ),
                question(
                    "q010",
                    "What is the purpose of the 'view' keyword in Solidity function declarations?",
                    [
                        "To make the function visible to other contracts",
                        "To indicate the function doesn't modify state",
                        "To optimize gas usage for complex calculations",
                        "To restrict function access to contract owner",
                    ],
                    1,
                ),
            ],
        },
        Quiz {
            course_id: "c003".to_string(),
            questions: vec![
                question(
                    "q011",
                    "What is the main purpose of DeFi?",
                    [
                        "To create new cryptocurrencies",
                        "To provide financial services without centralized intermediaries",
                        "To increase transaction speeds on blockchain networks",
                        "To regulate cryptocurrency markets",
                    ],
                    1,
                ),
                question(
                    "q012",
                    "What is 'yield farming' in DeFi?",
                    [
                        "Mining new cryptocurrency tokens",
                        "Staking cryptocurrency to validate transactions",
                        "Lending crypto assets to earn interest or additional tokens",
                        "Creating new DeFi platforms",
                    ],
                    2,
                ),
                question(
                    "q013",
                    "What is a 'liquidity pool' in DeFi?",
                    [
                        "A centralized exchange reserve",
                        "A collection of funds locked in a smart contract",
                        "A fund controlled by platform developers",
                        "A type of crypto wallet",
                    ],
                    1,
                ),
                question(
                    "q014",
                    "What is the main benefit of a deflationary tokenomics model?",
                    [
                        "It increases token supply over time",
                        "It potentially increases token value by reducing supply",
                        "It stabilizes the token price against fiat currencies",
                        "It increases network transaction speeds",
                    ],
                    1,
                ),
                question(
                    "q015",
                    "What is an 'impermanent loss' in DeFi?",
                    [
                        "Loss due to platform hacking",
                        "Loss due to cryptocurrency market volatility",
                        "Loss of value compared to holding assets outside a liquidity pool",
                        "Loss due to failed transactions",
                    ],
                    2,
                ),
            ],
        },
        Quiz {
            course_id: "c004".to_string(),
            questions: vec![
                question(
                    "q016",
                    "What does NFT stand for?",
                    [
                        "New Financial Transaction",
                        "Non-Fungible Token",
                        "Network File Transfer",
                        "New Format Technology",
                    ],
                    1,
                ),
                question(
                    "q017",
                    "What makes NFTs unique compared to cryptocurrencies like Bitcoin?",
                    [
                        "NFTs are faster to transfer",
                        "NFTs are less expensive",
                        "NFTs represent unique items rather than being interchangeable",
                        "NFTs don't use blockchain technology",
                    ],
                    2,
                ),
                question(
                    "q018",
                    "What is 'minting' in the context of NFTs?",
                    [
                        "Creating a new cryptocurrency",
                        "The process of creating an NFT on the blockchain",
                        "Selling an NFT on a marketplace",
                        "Converting digital art to physical art",
                    ],
                    1,
                ),
                question(
                    "q019",
                    "What is the most common Ethereum standard for NFTs?",
                    ["ERC-20", "ERC-721", "ERC-1155", "ERC-777"],
                    1,
                ),
                question(
                    "q020",
                    "What service is commonly used to store NFT metadata and images?",
                    [
                        "Amazon Web Services",
                        "Google Cloud",
                        "IPFS (InterPlanetary File System)",
                        "Microsoft Azure",
                    ],
                    2,
                ),
            ],
        },
    ]
}
