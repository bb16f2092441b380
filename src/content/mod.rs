//! Canned demonstration content
//!
//! The four built-in suites the playground runs: unit testing, mocking,
//! API testing, and dependency isolation. The content is static; every run
//! starts from a fresh copy with all cases idle.

use crate::models::{TestCase, TestCategory, TestExplanation, TestStatus, TestSuite};

fn case(
    id: &str,
    name: &str,
    description: &str,
    category: TestCategory,
    code: &str,
    expected_result: &str,
    what_is_tested: &str,
    what_is_not_tested: &str,
    why_it_matters: &str,
    concept: &str,
) -> TestCase {
    TestCase {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        code: code.to_string(),
        expected_result: expected_result.to_string(),
        category,
        explanation: TestExplanation {
            what_is_tested: what_is_tested.to_string(),
            what_is_not_tested: what_is_not_tested.to_string(),
            why_it_matters: why_it_matters.to_string(),
            concept: Some(concept.to_string()),
        },
        status: TestStatus::Idle,
        duration_ms: None,
    }
}

/// Build the built-in demonstration suites, all cases idle
pub fn test_suites() -> Vec<TestSuite> {
    vec![
        TestSuite {
            id: "unit-tests".to_string(),
            name: "Unit Tests".to_string(),
            description: "Test single functions in isolation".to_string(),
            icon: "\u{1F9EA}".to_string(),
            tests: vec![
                case(
                    "unit-1",
                    "calculateTotal computes correctly",
                    "Verifies that the function sums prices correctly",
                    TestCategory::Unit,
                    r#"// Function under test
function calculateTotal(items) {
  return items.reduce((sum, item) =>
    sum + item.price * item.quantity, 0
  );
}

// Test
describe('calculateTotal', () => {
  it('should sum correctly', () => {
    const items = [
      { price: 10, quantity: 2 },
      { price: 5, quantity: 3 }
    ];

    expect(calculateTotal(items))
      .toBe(35); // 10*2 + 5*3 = 35
  });
});"#,
                    "expect(35).toBe(35)",
                    "The pure calculation logic of the function",
                    "Input validation, error handling, database integration",
                    "Unit tests verify each building block works before assembling the house",
                    "Unit Testing",
                ),
                case(
                    "unit-2",
                    "formatCurrency formats as Euro",
                    "Verifies monetary formatting",
                    TestCategory::Unit,
                    r#"// Function under test
function formatCurrency(amount) {
  return new Intl.NumberFormat('it-IT', {
    style: 'currency',
    currency: 'EUR'
  }).format(amount);
}

// Test
describe('formatCurrency', () => {
  it('formats 1234.56 as 1.234,56 euro', () => {
    expect(formatCurrency(1234.56))
      .toBe('1.234,56 \u{20AC}');
  });
});"#,
                    "expect(\"1.234,56 \u{20AC}\").toBe(\"1.234,56 \u{20AC}\")",
                    "The formatted output for a specific input",
                    "Other currencies, negative numbers, edge cases",
                    "Guarantees UI consistency for locale-specific formatting",
                    "Pure Functions",
                ),
                case(
                    "unit-3",
                    "validateEmail returns true for valid addresses",
                    "Email validation test",
                    TestCategory::Unit,
                    r#"// Function under test
function validateEmail(email) {
  const regex = /^[^\s@]+@[^\s@]+\.[^\s@]+$/;
  return regex.test(email);
}

// Test
describe('validateEmail', () => {
  it('accepts valid addresses', () => {
    expect(validateEmail('user@example.com'))
      .toBe(true);
  });

  it('rejects addresses without @', () => {
    expect(validateEmail('userexample.com'))
      .toBe(false);
  });
});"#,
                    "expect(true).toBe(true)",
                    "Pattern matching for the basic email format",
                    "Domain existence, deliverability, MX records",
                    "A first layer of client-side validation means better UX",
                    "Input Validation",
                ),
            ],
        },
        TestSuite {
            id: "mock-tests".to_string(),
            name: "Mocking".to_string(),
            description: "Simulate external dependencies".to_string(),
            icon: "\u{1F3AD}".to_string(),
            tests: vec![
                case(
                    "mock-1",
                    "fetchUserData uses the mock instead of the real API",
                    "Shows how to replace HTTP calls with fake data",
                    TestCategory::Mock,
                    r#"// MOCK: replace fetch with a fake version
const mockFetch = jest.fn(() =>
  Promise.resolve({
    json: () => Promise.resolve({
      id: 1,
      name: 'Mario Rossi',
      email: 'mario@test.com'
    })
  })
);

// Inject the mock
global.fetch = mockFetch;

// Test
describe('fetchUserData', () => {
  it('returns (mocked) user data', async () => {
    const user = await fetchUserData(1);

    expect(mockFetch).toHaveBeenCalledWith(
      '/api/users/1'
    );

    expect(user.name).toBe('Mario Rossi');
  });
});"#,
                    "expect(\"Mario Rossi\").toBe(\"Mario Rossi\")",
                    "Response parsing logic and that the right endpoint is called",
                    "Network connectivity, the real server response, latency",
                    "Mocks make tests fast, reliable, and independent of external services",
                    "Mocking",
                ),
                case(
                    "mock-2",
                    "sendEmail calls the email service",
                    "Mock of an email delivery service",
                    TestCategory::Mock,
                    r#"// MOCK: fake email service
const mockEmailService = {
  send: jest.fn(() => Promise.resolve({
    success: true,
    messageId: 'mock-123'
  }))
};

// Test
describe('sendWelcomeEmail', () => {
  it('sends email with the right template', async () => {
    await sendWelcomeEmail(
      'user@test.com',
      'Mario',
      mockEmailService  // inject the mock
    );

    expect(mockEmailService.send)
      .toHaveBeenCalledWith({
        to: 'user@test.com',
        template: 'welcome',
        data: { name: 'Mario' }
      });
  });
});"#,
                    "expect(mockEmailService.send).toHaveBeenCalled()",
                    "That the function calls the email service with the right parameters",
                    "Actual delivery, template rendering, spam score",
                    "We never want to send real emails from tests",
                    "Service Mocking",
                ),
            ],
        },
        TestSuite {
            id: "api-tests".to_string(),
            name: "API Testing".to_string(),
            description: "Tests against simulated endpoints".to_string(),
            icon: "\u{1F310}".to_string(),
            tests: vec![
                case(
                    "api-1",
                    "GET /products returns the product list",
                    "Endpoint test with a simulated response",
                    TestCategory::Api,
                    r#"// Spin up a test server
const mockServer = setupServer(
  rest.get('/api/products', (req, res, ctx) => {
    return res(ctx.json([
      { id: 1, name: 'Laptop', price: 999 },
      { id: 2, name: 'Mouse', price: 29 }
    ]));
  })
);

// Test
describe('GET /api/products', () => {
  it('returns an array of products', async () => {
    const response = await fetch('/api/products');
    const products = await response.json();

    expect(products).toHaveLength(2);
    expect(products[0].name).toBe('Laptop');
  });
});"#,
                    "expect(products.length).toBe(2)",
                    "Response shape, data structure, status code",
                    "The real database, authentication, rate limiting",
                    "Verifies the API contract without depending on the backend",
                    "API Mocking (MSW)",
                ),
                case(
                    "api-2",
                    "POST /orders creates an order",
                    "Resource creation test",
                    TestCategory::Api,
                    r#"// Mock the POST
const mockServer = setupServer(
  rest.post('/api/orders', async (req, res, ctx) => {
    const body = await req.json();

    return res(ctx.status(201), ctx.json({
      id: 'order-789',
      items: body.items,
      total: 128.00,
      status: 'pending'
    }));
  })
);

// Test
describe('POST /api/orders', () => {
  it('creates an order and returns 201', async () => {
    const response = await fetch('/api/orders', {
      method: 'POST',
      body: JSON.stringify({
        items: [{ productId: 1, qty: 2 }]
      })
    });

    expect(response.status).toBe(201);
    const order = await response.json();
    expect(order.status).toBe('pending');
  });
});"#,
                    "expect(201).toBe(201)",
                    "Correct status code, response structure, initial state",
                    "Data persistence, business rule validation, payments",
                    "Exercises the frontend-to-API flow without side effects",
                    "Integration Testing",
                ),
            ],
        },
        TestSuite {
            id: "isolation-tests".to_string(),
            name: "Isolation".to_string(),
            description: "Separate the dependencies".to_string(),
            icon: "\u{1F512}".to_string(),
            tests: vec![
                case(
                    "iso-1",
                    "UserService does not depend on the real DB",
                    "Dependency injection for testability",
                    TestCategory::Isolation,
                    r#"// Pattern: dependency injection
class UserService {
  // The repository is INJECTED, not constructed
  constructor(private userRepo: IUserRepository) {}

  async getActiveUsers() {
    const users = await this.userRepo.findAll();
    return users.filter(u => u.isActive);
  }
}

// Test with a FAKE repository
describe('UserService', () => {
  it('keeps only active users', async () => {
    const fakeRepo = {
      findAll: () => Promise.resolve([
        { id: 1, name: 'Mario', isActive: true },
        { id: 2, name: 'Luigi', isActive: false }
      ])
    };

    const service = new UserService(fakeRepo);
    const active = await service.getActiveUsers();

    expect(active).toHaveLength(1);
    expect(active[0].name).toBe('Mario');
  });
});"#,
                    "expect(1).toBe(1)",
                    "The service's filtering logic in complete isolation",
                    "SQL queries, database connectivity, performance",
                    "Isolating dependencies keeps tests predictable and fast",
                    "Dependency Injection",
                ),
                case(
                    "iso-2",
                    "Mocked timer for deterministic tests",
                    "Controlling time inside tests",
                    TestCategory::Isolation,
                    r#"// Time is an external dependency too
function getGreeting() {
  const hour = new Date().getHours();
  if (hour < 12) return 'Good morning';
  if (hour < 18) return 'Good afternoon';
  return 'Good evening';
}

// Without a mock the test is unpredictable;
// with one it always behaves the same.

describe('getGreeting', () => {
  beforeEach(() => {
    // Freeze the clock at 10:00
    jest.useFakeTimers();
    jest.setSystemTime(new Date('2024-01-15T10:00:00'));
  });

  it('says good morning at 10', () => {
    expect(getGreeting()).toBe('Good morning');
  });

  afterEach(() => {
    jest.useRealTimers();
  });
});"#,
                    "expect(\"Good morning\").toBe(\"Good morning\")",
                    "Conditional logic based on the current hour",
                    "Different timezones, real boundary hours",
                    "Without the mock this test would only pass at certain times of day",
                    "Time Mocking",
                ),
            ],
        },
    ]
}
