//! Global CSS styles for the OpenSolo landing page.
//!
//! Soft gray canvas, lime accents, gentle motion.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* CANVAS (Backgrounds) */
  --gray-50: #f9fafb;
  --gray-100: #f3f4f6;
  --gray-200: #e5e7eb;

  /* LIME (Brand, Calls to Action) */
  --lime-300: #bef264;
  --lime-400: #a3e635;
  --lime-500: #84cc16;
  --lime-600: #65a30d;
  --lime-glow: rgba(163, 230, 53, 0.2);

  /* TEXT */
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;
  --link-hover: #1d4ed8;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-4xl: 2.25rem;
  --text-5xl: 3rem;

  /* Transitions */
  --transition-fast: 200ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--gray-50);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-size: var(--text-5xl);
  font-weight: 700;
  letter-spacing: -0.025em;
  line-height: 1.1;
  margin-top: 1.5rem;
  transition: transform var(--transition-normal);
}

.page-title:hover {
  transform: scale(1.05);
}

.tagline {
  font-size: var(--text-lg);
  color: var(--text-secondary);
  max-width: 32rem;
  margin: 1.5rem auto 0;
}

.section-header {
  font-size: var(--text-2xl);
  font-weight: 700;
  letter-spacing: -0.025em;
}

.body-text {
  color: var(--text-secondary);
}

/* === Status Dot === */
.status-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--lime-400);
}

.status-dot.active {
  box-shadow: 0 0 6px var(--lime-glow);
  animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

/* === Page Layout === */
.landing-root {
  position: relative;
  min-height: 100vh;
  overflow: hidden;
}

.landing {
  min-height: 100vh;
  background: linear-gradient(to bottom right, var(--gray-50), var(--gray-50), var(--gray-100));
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 3rem 1rem;
  position: relative;
  overflow: hidden;
}

.landing-header {
  max-width: 42rem;
  text-align: center;
  position: relative;
  z-index: 20;
  animation: slide-in-top 1s ease both;
}

@keyframes slide-in-top {
  from { opacity: 0; transform: translateY(-1rem); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes slide-in-bottom {
  from { opacity: 0; transform: translateY(1rem); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Logo & Badge === */
.logo-tile {
  width: 4rem;
  height: 4rem;
  margin: 0 auto;
  background: var(--lime-400);
  border-radius: 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
  cursor: pointer;
  transition: all var(--transition-slow);
}

.logo-tile:hover {
  transform: scale(1.1) rotate(3deg);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}

.logo-mark {
  font-weight: 800;
  font-size: var(--text-xl);
  color: #000;
}

.availability-badge {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 2rem;
  font-size: var(--text-sm);
  font-weight: 500;
  letter-spacing: 0.025em;
  color: var(--text-secondary);
}

/* === Buttons === */
.btn-waitlist,
.btn-publish {
  background: var(--lime-400);
  color: #000;
  font-family: var(--font-sans);
  font-weight: 600;
  border: none;
  border-radius: 0.5rem;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.btn-waitlist {
  margin-top: 2rem;
  padding: 0.75rem 2rem;
  font-size: var(--text-lg);
}

.btn-publish {
  padding: 0.5rem 1.5rem;
}

.btn-waitlist:hover,
.btn-publish:hover {
  background: var(--lime-500);
  transform: scale(1.05) translateY(-0.25rem);
  box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
}

.btn-waitlist:active {
  transform: scale(0.95);
}

.waitlist-count {
  margin-top: 1rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Countdown === */
.countdown {
  margin-top: 2rem;
  position: relative;
  z-index: 20;
  animation: slide-in-bottom 1s ease 0.7s both;
}

.countdown-cells {
  display: flex;
  justify-content: center;
  gap: 2rem;
}

.countdown-cell {
  text-align: center;
  cursor: pointer;
}

.countdown-value {
  font-size: var(--text-4xl);
  font-weight: 700;
  font-variant-numeric: tabular-nums;
  transition: all var(--transition-slow);
}

.countdown-cell:hover .countdown-value {
  transform: scale(1.25);
  color: var(--lime-600);
}

.countdown-label {
  margin-top: 0.5rem;
  font-size: var(--text-xs);
  font-weight: 500;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.countdown-caption {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1.5rem;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--text-secondary);
}

.countdown-caption-icon {
  color: #9ca3af;
  animation: pulse 2s ease-in-out infinite;
}

.countdown.expired .countdown-value {
  color: var(--lime-600);
}

/* === FAQ === */
.faq-section {
  width: 100%;
  max-width: 36rem;
  padding-top: 4rem;
  text-align: center;
  position: relative;
  z-index: 20;
  animation: slide-in-bottom 1s ease 0.9s both;
}

.faq-list {
  margin-top: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.faq-question {
  display: flex;
  align-items: center;
  justify-content: space-between;
  width: 100%;
  padding: 1rem;
  text-align: left;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  font-weight: 500;
  color: var(--text-primary);
  background: rgba(255, 255, 255, 0.5);
  border: 1px solid var(--gray-100);
  border-radius: 0.5rem;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.faq-question:hover {
  background: rgba(255, 255, 255, 0.7);
  border-color: var(--gray-200);
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
}

.faq-question-text {
  padding-right: 1rem;
}

.faq-toggle-icon {
  flex-shrink: 0;
  font-size: var(--text-xl);
  color: var(--text-muted);
  transition: all var(--transition-normal);
}

.faq-item.open .faq-toggle-icon {
  transform: rotate(45deg);
  color: var(--lime-600);
}

.faq-answer {
  padding: 0.5rem 1rem 1rem;
  animation: collapsible-down 200ms ease-out;
}

.faq-answer-body {
  padding: 0.75rem;
  font-size: var(--text-sm);
  text-align: left;
  color: var(--text-secondary);
  background: rgba(255, 255, 255, 0.3);
  border: 1px solid var(--gray-100);
  border-radius: 0.5rem;
}

@keyframes collapsible-down {
  from { opacity: 0; transform: translateY(-0.25rem); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Decorative Layers === */
.floating-ornaments {
  position: fixed;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.ornament {
  position: absolute;
  border-radius: 50%;
  background: rgba(163, 230, 53, 0.05);
  animation-name: float;
  animation-timing-function: ease-in-out;
  animation-iteration-count: infinite;
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-20px); }
}

.particle-overlay {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 10;
}

.cursor-dot {
  position: fixed;
  width: 16px;
  height: 16px;
  border-radius: 50%;
  background: var(--lime-glow);
  pointer-events: none;
  z-index: 50;
  transition: all 300ms ease-out;
}

.glow-orb {
  position: absolute;
  border-radius: 50%;
  filter: blur(64px);
  pointer-events: none;
  animation: pulse 2s ease-in-out infinite;
}

.glow-orb-left {
  top: 25%;
  left: 25%;
  width: 16rem;
  height: 16rem;
  background: rgba(163, 230, 53, 0.1);
}

.glow-orb-right {
  bottom: 25%;
  right: 25%;
  width: 24rem;
  height: 24rem;
  background: rgba(190, 242, 100, 0.05);
  animation-delay: 1s;
}

/* === Footer === */
.landing-footer {
  background: var(--gray-50);
  padding: 2rem 1rem;
  position: relative;
  z-index: 20;
  text-align: center;
}

.footer-cta {
  max-width: 42rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.footer-title {
  font-size: var(--text-xl);
  font-weight: 600;
}

.footer-copyright {
  max-width: 42rem;
  margin: 1.5rem auto 0;
  padding-top: 1.5rem;
  border-top: 1px solid var(--gray-200);
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.author-link {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.author-link:hover {
  color: var(--link-hover);
}
"#;
