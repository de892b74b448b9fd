use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                background: #0d0c0a;
                color: #e5e1da;
                font-family: "Shippori Mincho", "Hiragino Mincho ProN", serif;
                overflow-x: hidden;
            }
            a {
                color: inherit;
                text-decoration: none;
            }
            .landing-page {
                min-height: 100vh;
            }

            .top-nav {
                position: fixed;
                top: 0;
                width: 100%;
                z-index: 100;
                background: rgba(13, 12, 10, 0.95);
                backdrop-filter: blur(12px);
                border-bottom: 1px solid #3d3a33;
            }
            .nav-content {
                max-width: 72rem;
                margin: 0 auto;
                padding: 0 1rem;
                height: 4rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }
            .nav-logo {
                font-size: 1.4rem;
                font-weight: 700;
                color: #fde68a;
                letter-spacing: 0.15em;
            }
            .nav-logo-accent {
                color: #f59e0b;
            }
            .nav-links {
                display: flex;
                gap: 2rem;
                font-size: 11px;
                letter-spacing: 0.2em;
                font-weight: 700;
            }
            .nav-link:hover {
                color: #fbbf24;
            }
            .nav-actions {
                display: flex;
                align-items: center;
                gap: 1rem;
            }
            .nav-booking,
            .drawer-booking,
            .card-cta,
            .price-cta,
            .floating-cta-button {
                background: #fde68a;
                color: #0d0c0a;
                font-weight: 700;
                border-radius: 9999px;
                text-align: center;
                transition: background 0.2s ease, transform 0.2s ease;
            }
            .nav-booking {
                padding: 0.5rem 1.5rem;
                font-size: 0.75rem;
            }
            .nav-booking:hover,
            .card-cta:hover,
            .price-cta:hover {
                background: #ffffff;
            }
            .burger-menu {
                display: none;
                position: relative;
                z-index: 110;
                background: none;
                border: none;
                color: #fde68a;
                font-size: 1.5rem;
                padding: 0.5rem;
                cursor: pointer;
            }
            .drawer-backdrop {
                position: fixed;
                inset: 0;
                z-index: 100;
                background: rgba(0, 0, 0, 0.8);
                backdrop-filter: blur(4px);
            }
            .drawer {
                position: fixed;
                top: 0;
                bottom: 0;
                right: 0;
                width: 75%;
                z-index: 105;
                background: #1a1814;
                transform: translateX(100%);
                transition: transform 0.3s ease;
                display: none;
            }
            .drawer-open {
                transform: translateX(0);
            }
            .drawer-links {
                display: flex;
                flex-direction: column;
                gap: 2rem;
                padding: 6rem 2.5rem 2.5rem;
                text-align: center;
                font-size: 1.1rem;
            }
            .drawer-link {
                color: #ffffff;
                padding-bottom: 1rem;
                border-bottom: 1px solid rgba(255, 255, 255, 0.05);
            }
            .drawer-booking {
                padding: 1rem 0;
                margin-top: 1rem;
            }

            .hero {
                position: relative;
                min-height: 95vh;
                padding: 8rem 1rem 6rem;
                display: flex;
                align-items: center;
                overflow: hidden;
            }
            .hero-backdrop {
                position: absolute;
                inset: 0;
                pointer-events: none;
            }
            .hero-gradient {
                position: absolute;
                inset: 0;
                background: radial-gradient(ellipse at top, #1b1a18 0%, #0d0c0a 45%, #0a0a0c 100%);
            }
            .hero-nebula {
                position: absolute;
                inset: 0;
                opacity: 0.2;
                filter: blur(80px);
                background: linear-gradient(to top right, rgba(88, 28, 135, 0.1), rgba(120, 53, 15, 0.05), transparent);
            }
            .star-layer {
                position: absolute;
                inset: 0;
            }
            .star {
                position: absolute;
                border-radius: 9999px;
            }
            .star-far {
                width: 1px;
                height: 1px;
                background: #ffffff;
                box-shadow: 0 0 2px #ffffff;
            }
            .star-near {
                width: 2px;
                height: 2px;
                background: rgba(253, 230, 138, 0.4);
            }
            .hero-content {
                position: relative;
                z-index: 10;
                max-width: 56rem;
                margin: 0 auto;
                text-align: center;
            }
            .award-badge {
                display: inline-block;
                padding: 0.25rem 1.25rem;
                margin-bottom: 2rem;
                border: 1px solid rgba(245, 158, 11, 0.5);
                border-radius: 9999px;
                background: rgba(245, 158, 11, 0.1);
                color: #fde68a;
                font-size: 10px;
                letter-spacing: 0.3em;
                font-weight: 700;
            }
            .hero h1 {
                font-size: clamp(2.25rem, 6vw, 4.5rem);
                line-height: 1.35;
                color: #ffffff;
                text-shadow: 0 0 20px rgba(251, 191, 36, 0.4);
            }
            .hero h1 .accent {
                color: #fbbf24;
            }
            .hero-subtitle {
                max-width: 42rem;
                margin: 0 auto 3.5rem;
                line-height: 2;
                font-style: italic;
                text-shadow: 0 1px 3px #000000;
            }

            .card-picker {
                max-width: 42rem;
                margin: 0 auto;
                padding: 3rem;
                border: 1px solid rgba(120, 53, 15, 0.3);
                border-radius: 0.5rem;
                background: rgba(255, 255, 255, 0.03);
                backdrop-filter: blur(12px);
            }
            .card-picker-prompt {
                margin-bottom: 2.5rem;
                color: #fef3c7;
                font-size: 0.75rem;
                letter-spacing: 0.2em;
                font-weight: 700;
            }
            .card-grid {
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 2rem;
            }
            .card {
                aspect-ratio: 2 / 3;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                border: 1px solid rgba(255, 255, 255, 0.2);
                border-radius: 2px;
                background: rgba(255, 255, 255, 0.08);
                color: #ffffff;
                cursor: pointer;
                transition: all 0.7s ease;
            }
            .card:hover {
                border-color: rgba(245, 158, 11, 0.5);
            }
            .card-selected {
                transform: scale(1.05);
                border-color: rgba(251, 191, 36, 0.8);
                background: rgba(120, 53, 15, 0.3);
                box-shadow: 0 0 40px rgba(251, 191, 36, 0.35);
            }
            .card-icon {
                font-size: 1.5rem;
                margin-bottom: 1.25rem;
            }
            .card-name {
                font-size: 0.75rem;
                font-weight: 700;
                letter-spacing: 0.1em;
                margin-bottom: 0.5rem;
            }
            .card-meaning {
                font-size: 9px;
                color: #d1d5db;
                font-style: italic;
            }
            .card-reveal {
                margin-top: 2.5rem;
                display: flex;
                flex-direction: column;
                gap: 2rem;
            }
            .card-hint {
                padding: 1.5rem;
                border-left: 2px solid rgba(251, 191, 36, 0.5);
                background: rgba(255, 255, 255, 0.05);
                text-align: left;
                font-style: italic;
                color: #ffffff;
            }
            .card-cta {
                display: block;
                padding: 1.25rem 2.5rem;
                font-size: 1.125rem;
            }

            .about {
                padding: 6rem 1rem;
                background: #14120f;
                border-top: 1px solid rgba(120, 53, 15, 0.2);
                border-bottom: 1px solid rgba(120, 53, 15, 0.2);
            }
            .about-inner {
                max-width: 72rem;
                margin: 0 auto;
                display: flex;
                gap: 6rem;
                align-items: center;
            }
            .profile-card {
                flex: 5;
                padding: 2.5rem;
                text-align: center;
                background: #1a1814;
                border: 1px solid rgba(120, 53, 15, 0.3);
                box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
            }
            .profile-card h3 {
                font-size: 1.875rem;
                letter-spacing: 0.3em;
                color: #ffffff;
            }
            .profile-role {
                font-size: 10px;
                letter-spacing: 0.4em;
                color: rgba(253, 230, 138, 0.7);
                font-style: italic;
            }
            .award-link {
                color: #fbbf24;
                font-size: 9px;
                font-weight: 700;
            }
            .award-link:hover {
                text-decoration: underline;
            }
            .about-text {
                flex: 7;
                line-height: 1.8;
            }
            .about-text h2 {
                font-size: clamp(1.875rem, 4vw, 3rem);
                color: #ffffff;
            }
            .about-badges {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 1rem;
                font-size: 10px;
                letter-spacing: 0.1em;
                color: #fde68a;
            }
            .about-badges div {
                padding: 1.5rem;
                background: #1a1814;
                border: 1px solid rgba(120, 53, 15, 0.2);
            }
            .confidential {
                margin-top: 1.5rem;
                font-size: 10px;
                color: #9ca3af;
                letter-spacing: 0.1em;
            }

            .faq {
                padding: 6rem 1rem;
                background: #14120f;
            }
            .faq-inner {
                max-width: 48rem;
                margin: 0 auto;
            }
            .faq h2 {
                text-align: center;
                color: #fef3c7;
            }
            .faq-item {
                margin-top: 1.5rem;
                padding: 1.5rem;
                background: rgba(255, 255, 255, 0.05);
                border: 1px solid rgba(255, 255, 255, 0.1);
            }
            .faq-item:hover {
                border-color: rgba(245, 158, 11, 0.3);
            }
            .faq-q {
                color: #ffffff;
                font-weight: 700;
            }
            .faq-a {
                margin-top: 0.75rem;
                padding-top: 0.75rem;
                border-top: 1px solid rgba(255, 255, 255, 0.05);
                font-style: italic;
                line-height: 1.8;
            }
            .qa-mark {
                color: #fbbf24;
                margin-right: 0.75rem;
            }

            .price {
                padding: 7rem 1rem;
                text-align: center;
                background: linear-gradient(to bottom, #0d0c0a, #1a1814);
            }
            .price h2 {
                font-size: clamp(1.875rem, 4vw, 3rem);
                color: #ffffff;
                margin-bottom: 3rem;
            }
            .price-card {
                max-width: 48rem;
                margin: 0 auto;
                padding: 4rem;
                background: #14120f;
                border: 1px solid rgba(245, 158, 11, 0.2);
                border-radius: 1rem;
                box-shadow: 0 30px 70px rgba(0, 0, 0, 0.8);
            }
            .price-label {
                color: #fbbf24;
                font-weight: 700;
                letter-spacing: 0.3em;
                font-size: 0.75rem;
            }
            .price-amount {
                font-size: clamp(2.25rem, 6vw, 3.75rem);
                color: #ffffff;
                font-weight: 700;
                font-style: italic;
            }
            .price-regular {
                margin-left: 0.75rem;
                font-size: 0.875rem;
                color: #9ca3af;
                text-decoration: line-through;
            }
            .price-cta {
                display: block;
                margin: 2.5rem 0;
                padding: 1.5rem 0;
                font-size: 1.25rem;
            }
            .price-trust {
                display: flex;
                justify-content: center;
                gap: 2rem;
                font-size: 10px;
                letter-spacing: 0.2em;
                color: #9ca3af;
            }

            .disclaimers {
                padding: 4rem 1rem;
                background: rgba(0, 0, 0, 0.6);
                font-size: 12px;
                line-height: 1.7;
                color: #d1d5db;
            }
            .disclaimers-inner {
                max-width: 56rem;
                margin: 0 auto;
            }
            .citation {
                padding-left: 1rem;
                border-left: 2px solid rgba(245, 158, 11, 0.5);
            }

            .site-footer {
                padding: 4rem 1rem;
                border-top: 1px solid rgba(255, 255, 255, 0.05);
                color: #9ca3af;
                font-size: 11px;
                letter-spacing: 0.2em;
            }
            .footer-inner {
                max-width: 72rem;
                margin: 0 auto;
                display: flex;
                justify-content: space-between;
                align-items: center;
                gap: 3rem;
            }
            .footer-brand {
                color: #fde68a;
                font-size: 1.25rem;
                font-weight: 700;
            }
            .legal-links {
                display: flex;
                gap: 2.5rem;
            }
            .legal-link {
                background: none;
                border: none;
                color: #d1d5db;
                font: inherit;
                letter-spacing: inherit;
                text-decoration: underline;
                text-underline-offset: 4px;
                cursor: pointer;
            }
            .legal-link:hover {
                color: #fde68a;
            }

            .floating-cta {
                position: fixed;
                bottom: 0;
                left: 0;
                width: 100%;
                padding: 1rem;
                box-sizing: border-box;
                z-index: 110;
                transform: translateY(6rem);
                opacity: 0;
                pointer-events: none;
                transition: all 0.7s ease-in-out;
            }
            .floating-cta-visible {
                transform: translateY(0);
                opacity: 1;
                pointer-events: auto;
            }
            .floating-cta-button {
                display: flex;
                justify-content: center;
                gap: 0.5rem;
                padding: 1.25rem 0;
                font-size: 1.125rem;
                box-shadow: 0 -10px 40px rgba(0, 0, 0, 0.8);
            }

            .modal-overlay {
                position: fixed;
                inset: 0;
                z-index: 200;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 1rem;
                background: rgba(0, 0, 0, 0.85);
            }
            .modal-content {
                position: relative;
                max-width: 40rem;
                max-height: 80vh;
                overflow-y: auto;
                padding: 2.5rem;
                background: #14120f;
                border: 1px solid rgba(245, 158, 11, 0.2);
                border-radius: 0.75rem;
            }
            .modal-title {
                color: #fde68a;
            }
            .modal-section h3 {
                color: #ffffff;
                font-size: 0.95rem;
            }
            .modal-section p {
                line-height: 1.8;
                font-size: 0.875rem;
            }
            .modal-close {
                position: absolute;
                top: 1rem;
                right: 1rem;
                background: none;
                border: none;
                color: #fde68a;
                font-size: 1.5rem;
                cursor: pointer;
            }

            .not-found {
                padding: 10rem 1rem;
                text-align: center;
            }

            @keyframes space-drift-slow {
                0% { transform: translateY(0); }
                100% { transform: translateY(-100px); }
            }
            @keyframes space-drift-medium {
                0% { transform: translateY(0) rotate(0deg); }
                100% { transform: translateY(-150px) rotate(5deg); }
            }
            @keyframes nebula-drift {
                0% { transform: scale(1) translate(0, 0); }
                50% { transform: scale(1.1) translate(2%, 2%); }
                100% { transform: scale(1) translate(0, 0); }
            }
            @keyframes twinkle {
                0% { opacity: 0.3; transform: scale(1); }
                50% { opacity: 1; transform: scale(1.2); }
                100% { opacity: 0.3; transform: scale(1); }
            }
            @keyframes fade-in {
                from { opacity: 0; transform: translateY(10px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .drift-slow {
                opacity: 0.3;
                animation: space-drift-slow 120s linear infinite;
            }
            .drift-medium {
                opacity: 0.5;
                animation: space-drift-medium 80s linear infinite;
            }
            .nebula-drift {
                animation: nebula-drift 40s ease-in-out infinite;
            }
            .twinkle {
                animation: twinkle 4s ease-in-out infinite;
            }
            .fade-in {
                animation: fade-in 1s ease-out forwards;
            }

            @media (max-width: 768px) {
                .nav-links {
                    display: none;
                }
                .nav-booking {
                    display: none;
                }
                .burger-menu {
                    display: block;
                }
                .drawer {
                    display: block;
                }
                .card-picker {
                    padding: 1.5rem;
                }
                .card-grid {
                    gap: 0.75rem;
                }
                .about-inner,
                .footer-inner {
                    flex-direction: column;
                    gap: 3rem;
                }
                .price-card {
                    padding: 2rem;
                }
            }

            @media (prefers-reduced-motion: reduce) {
                .drift-slow,
                .drift-medium,
                .nebula-drift,
                .twinkle {
                    animation: none;
                }
            }
        "#)} />
    }
}
